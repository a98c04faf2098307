//! Parsing of raw, user-entered numeric fields.
//!
//! Input fields arrive as text typed into a form, often with thousands
//! separators (`"1,250,000"`). Parsing is strict: anything that is not a
//! finite number after separators are removed is rejected.

use crate::error::{CalcError, CalcResult};

/// Characters accepted as digit-group separators.
const GROUP_SEPARATORS: [char; 2] = [',', '_'];

/// Parses a numeric field, stripping thousands separators and whitespace.
///
/// # Examples
///
/// ```rust
/// use kira_core::input::parse_amount;
///
/// assert_eq!(parse_amount(" 300,000 ", "loanAmount").unwrap(), 300_000.0);
/// assert_eq!(parse_amount("4.25", "interestRate").unwrap(), 4.25);
/// assert!(parse_amount("", "loanAmount").is_err());
/// assert!(parse_amount("12abc", "loanAmount").is_err());
/// ```
pub fn parse_amount(raw: &str, field: &'static str) -> CalcResult<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !GROUP_SEPARATORS.contains(c))
        .collect();

    if cleaned.is_empty() {
        return Err(CalcError::invalid_input(field, "missing value"));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::invalid_input(field, format!("'{}' is not a number", raw.trim())))?;

    // `f64::from_str` accepts "inf" and "NaN"
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            format!("'{}' is not a finite number", raw.trim()),
        ));
    }

    Ok(value)
}

/// Parses a field that may be absent, treating absence as missing input.
pub fn parse_optional_amount(raw: Option<&str>, field: &'static str) -> CalcResult<f64> {
    match raw {
        Some(raw) => parse_amount(raw, field),
        None => Err(CalcError::invalid_input(field, "missing value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_amount("100000", "x").unwrap(), 100_000.0);
        assert_eq!(parse_amount("0.5", "x").unwrap(), 0.5);
        assert_eq!(parse_amount("-12.75", "x").unwrap(), -12.75);
    }

    #[test]
    fn test_parse_strips_separators() {
        assert_eq!(parse_amount("1,000,000", "x").unwrap(), 1_000_000.0);
        assert_eq!(parse_amount("7_500_000.25", "x").unwrap(), 7_500_000.25);
        assert_eq!(parse_amount("  2 000 ", "x").unwrap(), 2000.0);
    }

    #[test]
    fn test_parse_rejects_missing() {
        let err = parse_amount("   ", "loanTerm").unwrap_err();
        assert_eq!(err.field(), "loanTerm");
        assert!(err.to_string().contains("missing"));

        assert!(parse_optional_amount(None, "loanTerm").is_err());
        assert_eq!(parse_optional_amount(Some("3"), "loanTerm").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_amount("abc", "x").is_err());
        assert!(parse_amount("12abc", "x").is_err());
        assert!(parse_amount("1.2.3", "x").is_err());
        assert!(parse_amount("MYR 100", "x").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_amount("NaN", "x").is_err());
        assert!(parse_amount("inf", "x").is_err());
        assert!(parse_amount("-infinity", "x").is_err());
    }

    proptest! {
        #[test]
        fn prop_grouped_integers_parse(n in 0u64..10_000_000_000) {
            let digits = n.to_string();
            let mut grouped = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(c);
            }
            prop_assert_eq!(parse_amount(&grouped, "x").unwrap(), n as f64);
        }
    }
}
