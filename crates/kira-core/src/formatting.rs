//! Display formatting for calculator results.
//!
//! Calculators return raw `f64` values. These helpers round them to cents with
//! `rust_decimal` (half away from zero) and group the integer digits, the way a
//! form displays `MYR 1,060.66`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places.
///
/// Returns `None` for values a `Decimal` cannot hold (NaN, infinite, or
/// beyond ~7.9e28).
pub fn round_to_cents(amount: f64) -> Option<Decimal> {
    round_dp(amount, 2)
}

fn round_dp(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats a number with two decimals and thousands separators.
pub fn format_number(amount: f64) -> String {
    match round_to_cents(amount) {
        Some(rounded) => add_thousands_separator(&format!("{:.2}", rounded)),
        None => format!("{:.2}", amount),
    }
}

/// Formats a money amount prefixed by a currency label.
///
/// ```rust
/// use kira_core::formatting::format_money;
///
/// assert_eq!(format_money(1060.6551, "MYR"), "MYR 1,060.66");
/// assert_eq!(format_money(-2500.0, "USD"), "USD -2,500.00");
/// ```
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", currency, format_number(amount))
}

/// Formats a percentage value (already scaled by 100) with `decimals` places.
pub fn format_percent(value: f64, decimals: u32) -> String {
    match round_dp(value, decimals) {
        Some(rounded) => format!("{:.*}%", decimals as usize, rounded),
        None => format!("{:.*}%", decimals as usize, value),
    }
}

/// Add thousands separators to a number string.
fn add_thousands_separator(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let formatted: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, formatted, dec),
        None => format!("{}{}", sign, formatted),
    }
}
