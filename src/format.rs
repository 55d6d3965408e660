//! Вывод сумм с фиксированной точностью.

use crate::types::Money;
use rust_decimal::RoundingStrategy;

/// Сумма с символом валюты и ровно двумя знаками после запятой.
#[must_use]
pub fn format_money(amount: Money, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}
