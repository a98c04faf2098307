//! # Kira
//!
//! Personal finance calculators: loan payments and amortization schedules,
//! loan comparison, compound interest, property purchase costs, rental
//! yields, and fuel economy, with optional persistence of the last inputs.
//!
//! This crate re-exports [`kira_core`], [`kira_calc`], and [`kira_storage`].
//!
//! ```rust
//! use kira::prelude::*;
//!
//! let loan = LoanInput::parse("100,000", "5", "10").unwrap().compute().unwrap();
//! assert_eq!(format_money(loan.monthly_payment, "MYR"), "MYR 1,060.66");
//!
//! let forms = FormStore::new(InMemoryStore::new());
//! forms.save(CalculatorForm::Loan, &[("loanAmount", "100,000")]).unwrap();
//! assert_eq!(forms.load(CalculatorForm::Loan).unwrap().get("loanAmount"), Some("100,000"));
//! ```

pub use kira_calc;
pub use kira_core;
pub use kira_storage;

pub use kira_calc::*;
pub use kira_core::{CalcError, CalcResult, CompoundingFrequency};

/// Everything needed to run calculators and save their inputs.
pub mod prelude {
    pub use kira_calc::prelude::*;
    pub use kira_core::prelude::*;
    pub use kira_storage::prelude::*;
}
