//! Упорядоченный ряд дневных доходов и выборки из него.

use crate::types::{DailyIncome, Money, PeriodTotal};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Ряд дневных доходов по возрастанию дат, без пропусков.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeSeries {
    entries: Vec<DailyIncome>,
}

impl IncomeSeries {
    /// Оборачивает ряд, уже упорядоченный по дате.
    #[inline]
    #[must_use]
    pub const fn new(entries: Vec<DailyIncome>) -> Self {
        Self { entries }
    }

    /// Все записи ряда.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[DailyIncome] {
        &self.entries
    }

    /// Забирает записи ряда.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<DailyIncome> {
        self.entries
    }

    /// Число дней в ряду.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ряд пуст (целевая дата раньше даты начала).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Запись для ячейки календаря; `None` вне диапазона ряда.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyIncome> {
        self.entries
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Записи с датами в `[start, end]`.
    #[must_use]
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[DailyIncome] {
        let lo = self.entries.partition_point(|entry| entry.date < start);
        let hi = self.entries.partition_point(|entry| entry.date <= end);
        if lo >= hi {
            return &[];
        }
        &self.entries[lo..hi]
    }

    /// Записи в окне `center ± radius` дней (график вокруг выбранной даты).
    #[must_use]
    pub fn window(&self, center: NaiveDate, radius: u32) -> &[DailyIncome] {
        let radius = Days::new(u64::from(radius));
        let start = center.checked_sub_days(radius).unwrap_or(NaiveDate::MIN);
        let end = center.checked_add_days(radius).unwrap_or(NaiveDate::MAX);
        self.between(start, end)
    }

    /// Фактический доход за `[start, end]`; дни вне ряда не учитываются.
    #[must_use]
    pub fn sum_between(&self, start: NaiveDate, end: NaiveDate) -> Money {
        self.between(start, end)
            .iter()
            .map(DailyIncome::actual_income)
            .sum()
    }

    /// Накопленный доход на последний день, либо ноль.
    #[must_use]
    pub fn total_income(&self) -> Money {
        self.entries
            .last()
            .map_or(Decimal::ZERO, |entry| entry.cumulative_income)
    }

    /// Сумма неожиданных доходов по всему ряду.
    #[must_use]
    pub fn total_extra_income(&self) -> Money {
        self.entries.iter().map(|entry| entry.extra_income).sum()
    }

    /// Сумма неожиданных расходов по всему ряду.
    #[must_use]
    pub fn total_expense(&self) -> Money {
        self.entries.iter().map(|entry| entry.expense).sum()
    }

    /// Итоги по ISO-неделям для дней указанного года, новые недели первыми.
    #[must_use]
    pub fn weekly_totals(&self, year: i32) -> Vec<PeriodTotal> {
        self.buckets(year, |date| {
            let week = date.iso_week();
            (week.year(), week.week())
        })
    }

    /// Итоги по календарным месяцам указанного года, новые месяцы первыми.
    #[must_use]
    pub fn monthly_totals(&self, year: i32) -> Vec<PeriodTotal> {
        self.buckets(year, |date| (date.year(), date.month()))
    }

    fn buckets<K, F>(&self, year: i32, key_fn: F) -> Vec<PeriodTotal>
    where
        K: Ord,
        F: Fn(NaiveDate) -> K,
    {
        let mut map: BTreeMap<K, PeriodTotal> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.date.year() == year) {
            let bucket = map.entry(key_fn(entry.date)).or_insert(PeriodTotal {
                start: entry.date,
                end: entry.date,
                total: Decimal::ZERO,
                days: 0,
            });
            // Ряд упорядочен, конец периода совпадает с последней увиденной датой.
            bucket.end = entry.date;
            bucket.total += entry.actual_income();
            bucket.days += 1;
        }
        map.into_values().rev().collect()
    }
}

impl From<Vec<DailyIncome>> for IncomeSeries {
    fn from(entries: Vec<DailyIncome>) -> Self {
        Self::new(entries)
    }
}
