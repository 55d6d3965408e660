#![warn(missing_docs)]
//! Библиотека для расчёта ежедневного дохода по рабочему профилю и разовым операциям.
//!
//! Ядро составляют [`compute_daily_series`] и [`compute_stats`]: чистые функции,
//! которые по профилю и списку операций строят непрерывный ряд дневных
//! доходов и сводку за неделю, месяц и весь период.

mod calculator;
mod calendar;
mod config;
mod error;
mod format;
mod input;
mod logging;
mod series;
mod session;
mod storage;
mod types;

pub use crate::calculator::{
    compute_daily_series, compute_stats, elapsed_days, monthly_incomes, working_days_in_month,
};
pub use crate::calendar::{
    WorkWeek, days_inclusive, is_working_day, iso_week_bounds, month_bounds, month_length,
    month_start,
};
pub use crate::config::{Config, HOME_ENV};
pub use crate::error::TrackerError;
pub use crate::format::format_money;
pub use crate::input::{
    parse_date, parse_money, parse_positive, parse_positive_amount, parse_profile,
};
pub use crate::logging::{DEFAULT_FILTER, init_tracing};
pub use crate::series::IncomeSeries;
pub use crate::session::{DEFAULT_LOSS_LABEL, DEFAULT_WINDFALL_LABEL, Session};
pub use crate::storage::{JsonProfileStore, MemoryProfileStore, ProfileStore};
pub use crate::types::*;
