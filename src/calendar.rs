//! Календарные окна, перебор дней и классификация рабочих дней.

use crate::error::TrackerError;
use crate::types::WorkProfile;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Недельный режим, выводимый из числа рабочих дней в месяце.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkWeek {
    /// Понедельник–пятница.
    FiveDay,
    /// Понедельник–суббота.
    SixDay,
}

impl WorkWeek {
    /// Грубая эвристика: 24–26 дней означает шестидневку, всё остальное пятидневку.
    #[must_use]
    pub const fn from_days_per_month(days: u32) -> Self {
        match days {
            24..=26 => Self::SixDay,
            _ => Self::FiveDay,
        }
    }

    /// Рабочий ли это день недели в данном режиме.
    #[must_use]
    pub const fn includes(self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sun => false,
            Weekday::Sat => matches!(self, Self::SixDay),
            _ => true,
        }
    }
}

/// Определяет, начисляется ли за дату базовый доход.
#[must_use]
pub fn is_working_day(date: NaiveDate, profile: &WorkProfile) -> bool {
    WorkWeek::from_days_per_month(profile.work_days_per_month()).includes(date.weekday())
}

/// Все даты от `start` до `end` включительно; пусто, если `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Границы ISO-недели (понедельник–воскресенье), содержащей дату.
#[must_use]
pub fn iso_week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Первый день месяца.
///
/// # Errors
///
/// [`TrackerError::Date`], если год или месяц вне допустимого диапазона.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate, TrackerError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| TrackerError::Date {
        value: format!("{year:04}-{month:02}"),
    })
}

/// Число дней в месяце, содержащем дату.
#[must_use]
pub fn month_length(date: NaiveDate) -> u32 {
    // Последний день месяца предшествует первому числу следующего.
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Границы календарного месяца, содержащего дату.
#[must_use]
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let end = date.with_day(month_length(date)).unwrap_or(date);
    (start, end)
}
