//! Состояние пользовательской сессии: профиль и разовые операции.

use crate::calculator::{compute_daily_series, compute_stats};
use crate::error::TrackerError;
use crate::series::IncomeSeries;
use crate::storage::ProfileStore;
use crate::types::{
    IncomeStats, Money, ProfileState, Transaction, TransactionKind, WorkProfile,
    within_money_bound,
};
use chrono::NaiveDate;

/// Описание неожиданного дохода по умолчанию.
pub const DEFAULT_WINDFALL_LABEL: &str = "Неожиданный доход";
/// Описание неожиданного расхода по умолчанию.
pub const DEFAULT_LOSS_LABEL: &str = "Неожиданный расход";

/// Сессия владеет профилем и списком операций и пересчитывает ряд по запросу.
///
/// Профиль сохраняется через [`ProfileStore`], операции живут только в памяти.
#[derive(Debug)]
pub struct Session<S: ProfileStore> {
    store: S,
    state: ProfileState,
    transactions: Vec<Transaction>,
}

impl<S: ProfileStore> Session<S> {
    /// Открывает сессию, загружая профиль из хранилища.
    ///
    /// # Errors
    ///
    /// Ошибка чтения хранилища.
    pub fn open(store: S) -> Result<Self, TrackerError> {
        let state = ProfileState::from(store.load()?);
        Ok(Self {
            store,
            state,
            transactions: Vec::new(),
        })
    }

    /// Текущее состояние профиля.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Операции, записанные в этой сессии.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Хранилище профиля.
    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Заменяет профиль и сохраняет его.
    ///
    /// # Errors
    ///
    /// Ошибка записи; в этом случае состояние сессии не меняется.
    pub fn configure(&mut self, profile: WorkProfile) -> Result<(), TrackerError> {
        self.store.save(&profile)?;
        self.state = ProfileState::Configured(profile);
        Ok(())
    }

    /// Стирает сохранённый профиль и все операции сессии.
    ///
    /// # Errors
    ///
    /// Ошибка очистки хранилища.
    pub fn reset(&mut self) -> Result<(), TrackerError> {
        self.store.clear()?;
        self.state = ProfileState::Unconfigured;
        self.transactions.clear();
        Ok(())
    }

    /// Записывает неожиданный доход.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidAmount`], если сумма не положительна или больше
    /// [`MAX_MONEY`](crate::MAX_MONEY).
    pub fn record_windfall(
        &mut self,
        date: NaiveDate,
        amount: Money,
        description: Option<&str>,
    ) -> Result<&Transaction, TrackerError> {
        self.record(TransactionKind::Windfall, date, amount, description)
    }

    /// Записывает неожиданный расход.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidAmount`], если сумма не положительна или больше
    /// [`MAX_MONEY`](crate::MAX_MONEY).
    pub fn record_loss(
        &mut self,
        date: NaiveDate,
        amount: Money,
        description: Option<&str>,
    ) -> Result<&Transaction, TrackerError> {
        self.record(TransactionKind::Loss, date, amount, description)
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        date: NaiveDate,
        amount: Money,
        description: Option<&str>,
    ) -> Result<&Transaction, TrackerError> {
        if amount.is_zero() || !within_money_bound(amount) {
            return Err(TrackerError::InvalidAmount {
                value: amount.to_string(),
            });
        }
        let label = match description.map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => match kind {
                TransactionKind::Windfall => DEFAULT_WINDFALL_LABEL,
                TransactionKind::Loss => DEFAULT_LOSS_LABEL,
            },
        };
        let description = Some(label.to_string());
        self.transactions.push(Transaction {
            date,
            amount,
            kind,
            description,
        });
        let Some(recorded) = self.transactions.last() else {
            return Err(TrackerError::MissingField {
                field: "transaction",
            });
        };
        Ok(recorded)
    }

    /// Ряд дневных доходов до `end_date`; `None`, пока профиль не задан.
    #[must_use]
    pub fn daily_series(&self, end_date: NaiveDate) -> Option<IncomeSeries> {
        self.state.profile().map(|profile| {
            IncomeSeries::new(compute_daily_series(profile, &self.transactions, end_date))
        })
    }

    /// Статистика на целевую дату; `None`, пока профиль не задан.
    #[must_use]
    pub fn stats(&self, target_date: NaiveDate) -> Option<IncomeStats> {
        self.state
            .profile()
            .map(|profile| compute_stats(profile, &self.transactions, target_date))
    }
}
