//! Display formatting for monetary figures.
//!
//! Totals are computed unrounded; rounding to two places happens here, at
//! presentation time only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol used on every rendered figure.
pub const RUPEE: &str = "₹";

/// Round to two decimal places using half-up (commercial rounding).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly two decimal places, e.g. `236.00`.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Format with a currency symbol, e.g. `₹236.00` or `-₹5.00`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round_money(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// Quantities and percentages are shown as typed, without padding zeros.
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Format a percentage without trailing zeros, e.g. `18%` or `2.5%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}
