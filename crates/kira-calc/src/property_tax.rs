//! Property purchase costs: legal fee and stamp duties.
//!
//! The default schedule models Malaysian residential purchases:
//!
//! | Charge               | Tiers                                                     |
//! |----------------------|-----------------------------------------------------------|
//! | Legal fee            | 1.25% ≤ 500,000; 1% up to 7,500,000; 1% above             |
//! | Transfer stamp duty  | 1% ≤ 100,000; 2% ≤ 500,000; 3% ≤ 1,000,000; 4% above      |
//! | Loan stamp duty      | flat 0.5% of the loan                                     |

use kira_core::input::parse_amount;
use kira_core::validation::{ensure_finite, ensure_non_negative, ensure_positive};
use kira_core::CalcResult;
use serde::{Deserialize, Serialize};

use crate::tiers::{RateTier, TieredRateSchedule};

const LEGAL_FEE_TIERS: [RateTier; 3] = [
    RateTier::up_to(500_000.0, 1.25),
    RateTier::up_to(7_500_000.0, 1.0),
    RateTier::above(1.0),
];

const TRANSFER_DUTY_TIERS: [RateTier; 4] = [
    RateTier::up_to(100_000.0, 1.0),
    RateTier::up_to(500_000.0, 2.0),
    RateTier::up_to(1_000_000.0, 3.0),
    RateTier::above(4.0),
];

const LOAN_DUTY_PERCENT: f64 = 0.5;

/// Rates used to cost a property purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTaxSchedule {
    /// Legal fee tiers on the property price
    pub legal_fee: TieredRateSchedule,
    /// Transfer (sale and purchase) stamp duty tiers on the property price
    pub transfer_duty: TieredRateSchedule,
    /// Flat stamp duty on the loan amount, in percent
    pub loan_duty_percent: f64,
}

impl Default for PropertyTaxSchedule {
    fn default() -> Self {
        Self {
            legal_fee: TieredRateSchedule::from_known_tiers(&LEGAL_FEE_TIERS),
            transfer_duty: TieredRateSchedule::from_known_tiers(&TRANSFER_DUTY_TIERS),
            loan_duty_percent: LOAN_DUTY_PERCENT,
        }
    }
}

/// Raw property tax inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTaxInput {
    /// Purchase price
    pub property_price: f64,
    /// Amount financed
    pub loan_amount: f64,
}

impl PropertyTaxInput {
    /// Parses property tax inputs from raw form fields.
    pub fn parse(property_price: &str, loan_amount: &str) -> CalcResult<Self> {
        Ok(Self {
            property_price: parse_amount(property_price, "propertyPrice")?,
            loan_amount: parse_amount(loan_amount, "loanAmount")?,
        })
    }

    /// Computes costs with the default schedule.
    pub fn compute(&self) -> CalcResult<PropertyTaxResult> {
        compute_property_tax(self.property_price, self.loan_amount)
    }
}

/// Costs of a property purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTaxResult {
    /// Legal fee on the price
    pub legal_fee: f64,
    /// Transfer stamp duty on the price
    pub transfer_stamp_duty: f64,
    /// Stamp duty on the loan
    pub loan_stamp_duty: f64,
    /// Sum of the three charges
    pub total_cost: f64,
}

/// Calculate purchase costs with the default schedule.
///
/// Both the price and the loan must be positive.
pub fn compute_property_tax(
    property_price: f64,
    loan_amount: f64,
) -> CalcResult<PropertyTaxResult> {
    compute_property_tax_with(&PropertyTaxSchedule::default(), property_price, loan_amount)
}

/// Calculate purchase costs with a custom schedule.
pub fn compute_property_tax_with(
    schedule: &PropertyTaxSchedule,
    property_price: f64,
    loan_amount: f64,
) -> CalcResult<PropertyTaxResult> {
    let price = ensure_positive(property_price, "propertyPrice")?;
    let loan = ensure_positive(loan_amount, "loanAmount")?;
    let loan_duty_percent = ensure_non_negative(schedule.loan_duty_percent, "loanDutyPercent")?;

    let legal_fee = schedule.legal_fee.charge(price);
    let transfer_stamp_duty = schedule.transfer_duty.charge(price);
    let loan_stamp_duty = loan * loan_duty_percent / 100.0;
    let total_cost = ensure_finite(
        legal_fee + transfer_stamp_duty + loan_stamp_duty,
        "totalCost",
    )?;

    Ok(PropertyTaxResult {
        legal_fee,
        transfer_stamp_duty,
        loan_stamp_duty,
        total_cost,
    })
}
