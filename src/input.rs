//! Разбор пользовательского ввода: суммы, счётчики и даты.

use crate::error::TrackerError;
use crate::types::{Money, WorkProfile, within_money_bound};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static MONEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid money regex"));

/// Нормализует числовую строку: убирает разделители разрядов и ведущий плюс,
/// запятую меняет на точку. Плюс в середине числа остаётся и не пройдёт проверку.
fn normalize_number(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    digits.strip_prefix('+').unwrap_or(&digits).to_string()
}

/// Разбирает денежное значение.
///
/// # Errors
///
/// [`TrackerError::MissingField`] для пустой строки, [`TrackerError::Number`]
/// для строки, не похожей на десятичное число.
pub fn parse_money(value: &str, field: &'static str) -> Result<Money, TrackerError> {
    let normalized = normalize_number(value);
    if normalized.is_empty() {
        return Err(TrackerError::MissingField { field });
    }
    if !MONEY_RE.is_match(&normalized) {
        return Err(TrackerError::Number {
            value: value.trim().to_string(),
            field,
        });
    }
    Decimal::from_str(&normalized).map_err(|_| TrackerError::Number {
        value: value.trim().to_string(),
        field,
    })
}

/// Разбирает строго положительную сумму разовой операции.
///
/// # Errors
///
/// Ошибки [`parse_money`], а также [`TrackerError::InvalidAmount`] для нуля,
/// отрицательных сумм и сумм больше [`MAX_MONEY`](crate::MAX_MONEY).
pub fn parse_positive_amount(value: &str) -> Result<Money, TrackerError> {
    let amount = parse_money(value, "amount")?;
    if amount.is_zero() || !within_money_bound(amount) {
        return Err(TrackerError::InvalidAmount {
            value: value.trim().to_string(),
        });
    }
    Ok(amount)
}

/// Разбирает положительное целое (дни, часы).
///
/// # Errors
///
/// [`TrackerError::MissingField`] для пустой строки, [`TrackerError::Number`]
/// для нечисловой строки или нуля.
pub fn parse_positive(value: &str, field: &'static str) -> Result<u32, TrackerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::MissingField { field });
    }
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TrackerError::Number {
            value: trimmed.to_string(),
            field,
        }),
    }
}

/// Разбирает дату в формате `yyyy-mm-dd`.
///
/// # Errors
///
/// [`TrackerError::Date`], если строка не является корректной датой.
pub fn parse_date(value: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TrackerError::Date {
        value: value.trim().to_string(),
    })
}

/// Собирает профиль из текстовых полей формы.
///
/// # Errors
///
/// Ошибка разбора любого поля или нарушение инвариантов [`WorkProfile::new`].
pub fn parse_profile(
    salary: &str,
    work_days: &str,
    work_hours: &str,
    start_date: &str,
) -> Result<WorkProfile, TrackerError> {
    WorkProfile::new(
        parse_money(salary, "monthly_salary")?,
        parse_positive(work_days, "work_days_per_month")?,
        parse_positive(work_hours, "work_hours_per_day")?,
        parse_date(start_date)?,
    )
}
