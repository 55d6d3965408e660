//! Доменные типы: рабочий профиль, разовые операции и рассчитанные ряды.

use crate::error::TrackerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Денежное значение, используем `Decimal` для точных расчётов.
pub type Money = Decimal;

/// Максимальное число рабочих дней в месяце.
pub const MAX_WORK_DAYS_PER_MONTH: u32 = 31;

/// Верхняя граница оклада и суммы разовой операции (10^15).
///
/// Накопленный итог за любой диапазон дат `NaiveDate` при такой границе
/// остаётся далеко внутри диапазона `Decimal`.
pub const MAX_MONEY: Money = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Сумма лежит в `0..=MAX_MONEY`.
#[must_use]
pub fn within_money_bound(amount: Money) -> bool {
    amount >= Decimal::ZERO && amount <= MAX_MONEY
}

/// Параметры занятости пользователя.
///
/// Поля закрыты: профиль создаётся только через [`WorkProfile::new`],
/// поэтому `work_days_per_month > 0` и `work_hours_per_day > 0` всегда.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkProfile {
    monthly_salary: Money,
    work_days_per_month: u32,
    work_hours_per_day: u32,
    start_date: NaiveDate,
}

impl WorkProfile {
    /// Проверяет параметры и создаёт профиль.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidProfile`], если оклад вне `0..=MAX_MONEY`, число
    /// рабочих дней вне `1..=31` или число часов равно нулю.
    pub fn new(
        monthly_salary: Money,
        work_days_per_month: u32,
        work_hours_per_day: u32,
        start_date: NaiveDate,
    ) -> Result<Self, TrackerError> {
        if !within_money_bound(monthly_salary) {
            return Err(TrackerError::InvalidProfile {
                field: "monthly_salary",
                reason: "must be between 0 and 10^15",
            });
        }
        if work_days_per_month == 0 || work_days_per_month > MAX_WORK_DAYS_PER_MONTH {
            return Err(TrackerError::InvalidProfile {
                field: "work_days_per_month",
                reason: "must be between 1 and 31",
            });
        }
        if work_hours_per_day == 0 {
            return Err(TrackerError::InvalidProfile {
                field: "work_hours_per_day",
                reason: "must be positive",
            });
        }
        Ok(Self {
            monthly_salary,
            work_days_per_month,
            work_hours_per_day,
            start_date,
        })
    }

    /// Месячный оклад.
    #[must_use]
    pub const fn monthly_salary(&self) -> Money {
        self.monthly_salary
    }

    /// Рабочих дней в месяце.
    #[must_use]
    pub const fn work_days_per_month(&self) -> u32 {
        self.work_days_per_month
    }

    /// Рабочих часов в день.
    #[must_use]
    pub const fn work_hours_per_day(&self) -> u32 {
        self.work_hours_per_day
    }

    /// Дата, с которой начисляется доход.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Доход за один рабочий день: оклад / рабочие дни.
    #[must_use]
    pub fn daily_income(&self) -> Money {
        self.monthly_salary / Decimal::from(self.work_days_per_month)
    }

    /// Доход за один рабочий час: дневной доход / часы.
    #[must_use]
    pub fn hourly_income(&self) -> Money {
        self.daily_income() / Decimal::from(self.work_hours_per_day)
    }
}

/// Состояние профиля в сессии: ещё не задан или настроен.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileState {
    /// Пользователь ещё не ввёл параметры работы.
    #[default]
    Unconfigured,
    /// Профиль задан.
    Configured(WorkProfile),
}

impl ProfileState {
    /// Возвращает профиль, если он настроен.
    #[must_use]
    pub const fn profile(&self) -> Option<&WorkProfile> {
        match self {
            Self::Unconfigured => None,
            Self::Configured(profile) => Some(profile),
        }
    }
}

impl From<Option<WorkProfile>> for ProfileState {
    fn from(value: Option<WorkProfile>) -> Self {
        value.map_or(Self::Unconfigured, Self::Configured)
    }
}

/// Вид разовой операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Неожиданный доход.
    Windfall,
    /// Неожиданный расход.
    Loss,
}

/// Разовая операция, привязанная к дате.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Дата, к которой относится операция.
    pub date: NaiveDate,
    /// Сумма; знак не учитывается, направление задаёт `kind`.
    pub amount: Money,
    /// Вид операции.
    pub kind: TransactionKind,
    /// Необязательное описание.
    pub description: Option<String>,
}

impl Transaction {
    /// Неожиданный доход на указанную дату.
    #[must_use]
    pub const fn windfall(date: NaiveDate, amount: Money) -> Self {
        Self {
            date,
            amount,
            kind: TransactionKind::Windfall,
            description: None,
        }
    }

    /// Неожиданный расход на указанную дату.
    #[must_use]
    pub const fn loss(date: NaiveDate, amount: Money) -> Self {
        Self {
            date,
            amount,
            kind: TransactionKind::Loss,
            description: None,
        }
    }

    /// Добавляет описание операции.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Доход, отнесённый к одному календарному дню.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyIncome {
    /// Дата.
    pub date: NaiveDate,
    /// Базовый доход по профилю (ноль в выходной).
    pub base_income: Money,
    /// Сумма неожиданных доходов за день.
    pub extra_income: Money,
    /// Сумма неожиданных расходов за день.
    pub expense: Money,
    /// Накопленный фактический доход с даты начала по этот день включительно.
    pub cumulative_income: Money,
}

impl DailyIncome {
    /// Фактический доход за день: база + доходы − расходы.
    #[must_use]
    pub fn actual_income(&self) -> Money {
        self.base_income + self.extra_income - self.expense
    }
}

/// Сводка дохода на целевую дату.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStats {
    /// Ряд от даты начала до целевой даты.
    pub daily_series: Vec<DailyIncome>,
    /// Доход за ISO-неделю целевой даты.
    pub weekly_total: Money,
    /// Доход за календарный месяц целевой даты.
    pub monthly_total: Money,
    /// Накопленный доход на последний день ряда.
    pub total_income: Money,
    /// Все неожиданные доходы ряда.
    pub total_extra_income: Money,
    /// Все неожиданные расходы ряда.
    pub total_expense: Money,
}

/// Итог за неделю или месяц для списочных представлений.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    /// Первый день периода, попавший в ряд.
    pub start: NaiveDate,
    /// Последний день периода, попавший в ряд.
    pub end: NaiveDate,
    /// Фактический доход за период.
    pub total: Money,
    /// Число дней ряда в периоде.
    pub days: usize,
}
