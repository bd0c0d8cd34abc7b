//! Money helpers
//!
//! Every amount is computed in `Decimal` and converted back to `f64` only
//! at the wire/display edge, rounded to 2 decimal places half-up.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Non-finite input logs an error and becomes zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

/// `price × quantity`
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// `amount × percent ÷ 100`
pub fn percent_of(amount: Decimal, percent: f64) -> Decimal {
    amount * to_decimal(percent) / Decimal::ONE_HUNDRED
}

/// Two-decimal display string (`462.00`)
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round(value))
}
