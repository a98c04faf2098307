//! # Kira Core
//!
//! Core types and helpers shared by the Kira finance calculators.
//!
//! This crate provides the foundational building blocks used throughout Kira:
//!
//! - **Errors**: The single [`CalcError::InvalidInput`] taxonomy returned by every calculator
//! - **Input**: Parsing of raw, user-entered numeric strings (thousands separators allowed)
//! - **Validation**: Domain checks (finite, positive, non-negative)
//! - **Types**: The closed [`CompoundingFrequency`] variant
//! - **Formatting**: Cent rounding and grouped currency strings for display layers
//!
//! ## Example
//!
//! ```rust
//! use kira_core::prelude::*;
//!
//! let amount = parse_amount("1,250,000.50", "loanAmount").unwrap();
//! assert_eq!(amount, 1_250_000.5);
//! assert_eq!(format_money(amount, "MYR"), "MYR 1,250,000.50");
//!
//! assert!(parse_amount("abc", "loanAmount").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod formatting;
pub mod input;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::formatting::{format_money, format_number, format_percent, round_to_cents};
    pub use crate::input::{parse_amount, parse_optional_amount};
    pub use crate::types::CompoundingFrequency;
    pub use crate::validation::{ensure_finite, ensure_non_negative, ensure_positive};
}

// Re-export commonly used types at crate root
pub use error::{CalcError, CalcResult};
pub use types::CompoundingFrequency;
