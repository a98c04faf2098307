//! Error types for the Kira calculators.
//!
//! Every calculator reports failure the same way: the input was not usable.
//! A missing field, a malformed number, and a value outside its domain all
//! collapse into [`CalcError::InvalidInput`], so callers can keep whatever
//! result they were already showing.

use thiserror::Error;

/// A specialized Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The error type returned by every calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required field was missing, non-numeric, or outside its domain.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl CalcError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejected {}: {}", field, reason);
        Self::InvalidInput { field, reason }
    }

    /// Returns the name of the field that was rejected.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::invalid_input("loanTerm", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'loanTerm': must be positive, got 0"
        );
    }

    #[test]
    fn test_error_field() {
        let err = CalcError::invalid_input("distance", "missing value");
        assert_eq!(err.field(), "distance");
    }
}
