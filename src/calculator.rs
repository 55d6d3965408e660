//! Построение ряда дневных доходов и сводной статистики.

use crate::calendar::{
    days_inclusive, is_working_day, iso_week_bounds, month_bounds, month_start,
};
use crate::error::TrackerError;
use crate::series::IncomeSeries;
use crate::types::{DailyIncome, IncomeStats, Money, Transaction, TransactionKind, WorkProfile};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Разовые операции одного дня, уже разнесённые по видам.
#[derive(Debug, Clone, Copy, Default)]
struct DayTransactions {
    extra_income: Money,
    expense: Money,
}

/// Группирует операции по дате, суммируя модули сумм по видам.
fn bucket_transactions(transactions: &[Transaction]) -> HashMap<NaiveDate, DayTransactions> {
    let mut map: HashMap<NaiveDate, DayTransactions> = HashMap::new();
    for tx in transactions {
        let day = map.entry(tx.date).or_default();
        match tx.kind {
            TransactionKind::Windfall => day.extra_income += tx.amount.abs(),
            TransactionKind::Loss => day.expense += tx.amount.abs(),
        }
    }
    map
}

/// Строит ряд дневных доходов от даты начала профиля до `end_date` включительно.
///
/// Каждый календарный день представлен ровно одной записью, выходные получают
/// нулевой базовый доход. Если `end_date` раньше даты начала, ряд пуст.
#[must_use]
pub fn compute_daily_series(
    profile: &WorkProfile,
    transactions: &[Transaction],
    end_date: NaiveDate,
) -> Vec<DailyIncome> {
    let by_date = bucket_transactions(transactions);
    let daily_income = profile.daily_income();
    let mut cumulative = Decimal::ZERO;

    let series: Vec<DailyIncome> = days_inclusive(profile.start_date(), end_date)
        .map(|date| {
            let base_income = if is_working_day(date, profile) {
                daily_income
            } else {
                Decimal::ZERO
            };
            let day = by_date.get(&date).copied().unwrap_or_default();
            cumulative += base_income + day.extra_income - day.expense;
            DailyIncome {
                date,
                base_income,
                extra_income: day.extra_income,
                expense: day.expense,
                cumulative_income: cumulative,
            }
        })
        .collect();

    debug!(
        start = %profile.start_date(),
        end = %end_date,
        days = series.len(),
        transactions = transactions.len(),
        "computed daily income series"
    );
    series
}

/// Считает статистику на целевую дату: неделя, месяц и итоги с даты начала.
#[must_use]
pub fn compute_stats(
    profile: &WorkProfile,
    transactions: &[Transaction],
    target_date: NaiveDate,
) -> IncomeStats {
    let series = IncomeSeries::new(compute_daily_series(profile, transactions, target_date));

    let (week_start, week_end) = iso_week_bounds(target_date);
    let (month_first, month_last) = month_bounds(target_date);

    IncomeStats {
        weekly_total: series.sum_between(week_start, week_end),
        monthly_total: series.sum_between(month_first, month_last),
        total_income: series.total_income(),
        total_extra_income: series.total_extra_income(),
        total_expense: series.total_expense(),
        daily_series: series.into_inner(),
    }
}

/// Ряд за один календарный месяц.
///
/// Накопленный доход в записях считается с даты начала профиля, а не с
/// первого числа месяца.
///
/// # Errors
///
/// [`TrackerError::Date`], если месяц вне `1..=12` или год вне диапазона.
pub fn monthly_incomes(
    profile: &WorkProfile,
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<Vec<DailyIncome>, TrackerError> {
    let (first, last) = month_bounds(month_start(year, month)?);
    let series = IncomeSeries::new(compute_daily_series(profile, transactions, last));
    Ok(series.between(first, last).to_vec())
}

/// Число рабочих дней месяца по недельному режиму профиля.
///
/// # Errors
///
/// [`TrackerError::Date`], если месяц вне `1..=12` или год вне диапазона.
pub fn working_days_in_month(
    profile: &WorkProfile,
    year: i32,
    month: u32,
) -> Result<usize, TrackerError> {
    let (first, last) = month_bounds(month_start(year, month)?);
    Ok(days_inclusive(first, last)
        .filter(|date| is_working_day(*date, profile))
        .count())
}

/// Число дней от `start` до `end` включительно; не больше нуля, если `end < start`.
#[must_use]
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}
