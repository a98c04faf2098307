//! CLI error types.

use kira_core::CalcError;
use kira_storage::StorageError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing required argument with no saved value to fall back on.
    #[error("Missing required argument: {flag} (no saved value for '{field}')")]
    MissingArgument {
        /// Command-line flag
        flag: &'static str,
        /// Form field name
        field: &'static str,
    },

    /// Calculation error.
    #[error("{0}")]
    Calculation(#[from] CalcError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
