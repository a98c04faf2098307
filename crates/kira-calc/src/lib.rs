//! # kira-calc
//!
//! Stateless finance calculators.
//!
//! Every calculator is a pure function from numeric inputs to a result record,
//! returning [`CalcError::InvalidInput`](kira_core::CalcError) when an input is
//! missing, non-numeric, or outside its domain:
//!
//! - **Loans**: annuity payment, totals, mortgage constant ([`compute_loan`])
//! - **Amortization**: month-by-month schedule ([`generate_amortization_schedule`])
//! - **Loan comparison**: two rate/term scenarios over one principal ([`compare_loans`])
//! - **Savings**: compound interest with monthly deposits ([`compute_compound_interest`])
//! - **Property tax**: legal fee and stamp duties from marginal tiers ([`compute_property_tax`])
//! - **Rental ROI**: gross, net, and leveraged yields ([`compute_roi`])
//! - **Fuel economy**: km per litre and trip cost ([`compute_fuel_economy`])
//!
//! Results hold raw `f64` values; rounding and currency formatting belong to
//! the caller (see `kira_core::formatting`).
//!
//! ## Example
//!
//! ```rust
//! use kira_calc::prelude::*;
//!
//! let loan = compute_loan(100_000.0, 5.0, 10.0).unwrap();
//! assert!((loan.monthly_payment - 1060.66).abs() < 0.01);
//!
//! let schedule = generate_amortization_schedule(100_000.0, 5.0, 10.0).unwrap();
//! assert_eq!(schedule.len(), 120);
//!
//! assert!(compute_loan(100_000.0, 0.0, 10.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod amortization;
pub mod comparison;
pub mod compound;
pub mod fuel;
pub mod loan;
pub mod property_tax;
pub mod roi;
pub mod tiers;

pub use amortization::{
    generate_amortization_schedule, AmortizationRow, AmortizationSchedule, MAX_SCHEDULE_MONTHS,
};
pub use comparison::{compare_loans, LoanComparison, LoanTerms, Scenario};
pub use compound::{compute_compound_interest, CompoundInterestInput, CompoundInterestResult};
pub use fuel::{compute_fuel_economy, FuelEconomyInput, FuelEconomyResult, TripCost};
pub use loan::{compute_loan, LoanInput, LoanResult, PaymentBreakdown};
pub use property_tax::{
    compute_property_tax, compute_property_tax_with, PropertyTaxInput, PropertyTaxResult,
    PropertyTaxSchedule,
};
pub use roi::{compute_roi, RoiInput, RoiResult};
pub use tiers::{RateTier, TierCharge, TieredRateSchedule};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::amortization::*;
    pub use crate::comparison::*;
    pub use crate::compound::*;
    pub use crate::fuel::*;
    pub use crate::loan::*;
    pub use crate::property_tax::*;
    pub use crate::roi::*;
    pub use crate::tiers::*;
    pub use kira_core::{CalcError, CalcResult, CompoundingFrequency};
}
