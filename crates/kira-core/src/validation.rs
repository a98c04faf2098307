//! Domain checks applied to parsed inputs and computed outputs.

use crate::error::{CalcError, CalcResult};

/// Ensures a value is finite (not NaN or infinite).
pub fn ensure_finite(value: f64, field: &'static str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            format!("value is not finite ({})", value),
        ))
    }
}

/// Ensures a value is finite and strictly greater than zero.
pub fn ensure_positive(value: f64, field: &'static str) -> CalcResult<f64> {
    let value = ensure_finite(value, field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            format!("must be greater than zero, got {}", value),
        ))
    }
}

/// Ensures a value is finite and not negative.
pub fn ensure_non_negative(value: f64, field: &'static str) -> CalcResult<f64> {
    let value = ensure_finite(value, field)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(1.0, "x").is_ok());
        assert!(ensure_finite(f64::NAN, "x").is_err());
        assert!(ensure_finite(f64::INFINITY, "x").is_err());
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive(0.01, "x").unwrap(), 0.01);
        assert!(ensure_positive(0.0, "x").is_err());
        assert!(ensure_positive(-5.0, "x").is_err());
        assert!(ensure_positive(f64::NAN, "x").is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative(0.0, "x").unwrap(), 0.0);
        assert!(ensure_non_negative(-0.01, "x").is_err());
        assert!(ensure_non_negative(f64::NEG_INFINITY, "x").is_err());
    }
}
