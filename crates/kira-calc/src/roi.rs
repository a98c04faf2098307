//! Rental property yields.
//!
//! Three yields at increasing levels of adjustment:
//!
//! - **Gross**: annual rent / price
//! - **Net**: (annual rent − annual expenses) / price
//! - **Net leveraged**: (annual rent − expenses − loan interest) / cash invested,
//!   where cash invested (capital cost) is price − loan

use kira_core::input::parse_amount;
use kira_core::validation::{ensure_finite, ensure_non_negative, ensure_positive};
use kira_core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

use crate::loan::MONTHS_PER_YEAR;

/// Raw rental ROI inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Purchase price
    pub property_price: f64,
    /// Monthly rent received
    pub monthly_rental: f64,
    /// Annual running costs (maintenance, insurance, assessment, ...)
    pub annual_expenses: f64,
    /// Amount financed
    pub loan_amount: f64,
    /// Annual loan rate in percent
    pub annual_rate_percent: f64,
}

impl RoiInput {
    /// Parses ROI inputs from raw form fields.
    pub fn parse(
        property_price: &str,
        monthly_rental: &str,
        annual_expenses: &str,
        loan_amount: &str,
        interest_rate: &str,
    ) -> CalcResult<Self> {
        Ok(Self {
            property_price: parse_amount(property_price, "propertyPrice")?,
            monthly_rental: parse_amount(monthly_rental, "monthlyRental")?,
            annual_expenses: parse_amount(annual_expenses, "annualExpenses")?,
            loan_amount: parse_amount(loan_amount, "loanAmount")?,
            annual_rate_percent: parse_amount(interest_rate, "interestRate")?,
        })
    }

    /// Computes the yields for these inputs.
    pub fn compute(&self) -> CalcResult<RoiResult> {
        compute_roi(
            self.property_price,
            self.monthly_rental,
            self.annual_expenses,
            self.loan_amount,
            self.annual_rate_percent,
        )
    }
}

/// Rental yields and the amounts behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Annual rent / price, percent
    pub gross_yield_percent: f64,
    /// (Annual rent − expenses) / price, percent
    pub net_yield_percent: f64,
    /// (Annual rent − expenses − interest) / capital cost, percent
    pub net_leveraged_yield_percent: f64,
    /// Monthly rent × 12
    pub annual_rental_income: f64,
    /// Loan × rate, simple annual interest
    pub annual_interest_cost: f64,
    /// Price − loan
    pub capital_cost: f64,
}

/// Calculate rental yields for a property.
///
/// # Errors
///
/// `InvalidInput` when the price or rent is not positive, when expenses,
/// loan, or rate are negative, or when the loan covers the whole price
/// (capital cost ≤ 0 leaves nothing to divide by).
pub fn compute_roi(
    property_price: f64,
    monthly_rental: f64,
    annual_expenses: f64,
    loan_amount: f64,
    annual_rate_percent: f64,
) -> CalcResult<RoiResult> {
    let price = ensure_positive(property_price, "propertyPrice")?;
    let rental = ensure_positive(monthly_rental, "monthlyRental")?;
    let expenses = ensure_non_negative(annual_expenses, "annualExpenses")?;
    let loan = ensure_non_negative(loan_amount, "loanAmount")?;
    let rate = ensure_non_negative(annual_rate_percent, "interestRate")?;

    let capital_cost = price - loan;
    if capital_cost <= 0.0 {
        return Err(CalcError::invalid_input(
            "loanAmount",
            format!(
                "loan of {} leaves no capital invested in a property priced at {}",
                loan, price
            ),
        ));
    }

    let annual_rental_income = rental * MONTHS_PER_YEAR;
    let annual_interest_cost = loan * rate / 100.0;

    let gross_yield_percent = ensure_finite(annual_rental_income / price * 100.0, "grossYield")?;
    let net_yield_percent = ensure_finite(
        (annual_rental_income - expenses) / price * 100.0,
        "netYield",
    )?;
    let net_leveraged_yield_percent = ensure_finite(
        (annual_rental_income - expenses - annual_interest_cost) / capital_cost * 100.0,
        "netLeveragedYield",
    )?;

    Ok(RoiResult {
        gross_yield_percent,
        net_yield_percent,
        net_leveraged_yield_percent,
        annual_rental_income,
        annual_interest_cost,
        capital_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unleveraged_purchase() {
        let result = compute_roi(500_000.0, 2_000.0, 5_000.0, 0.0, 0.0).unwrap();

        assert_relative_eq!(result.annual_rental_income, 24_000.0);
        assert_relative_eq!(result.gross_yield_percent, 4.8, epsilon = 1e-12);
        assert_relative_eq!(result.net_yield_percent, 3.8, epsilon = 1e-12);
        assert_eq!(result.net_leveraged_yield_percent, result.net_yield_percent);
        assert_relative_eq!(result.capital_cost, 500_000.0);
        assert_eq!(result.annual_interest_cost, 0.0);
    }

    #[test]
    fn test_leveraged_purchase() {
        let result = compute_roi(500_000.0, 2_000.0, 5_000.0, 400_000.0, 4.0).unwrap();

        assert_relative_eq!(result.annual_interest_cost, 16_000.0);
        assert_relative_eq!(result.capital_cost, 100_000.0);
        // (24,000 − 5,000 − 16,000) / 100,000
        assert_relative_eq!(result.net_leveraged_yield_percent, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_leveraged_yield() {
        let result = compute_roi(500_000.0, 1_500.0, 6_000.0, 450_000.0, 5.0).unwrap();
        assert!(result.net_leveraged_yield_percent < 0.0);
    }

    #[test]
    fn test_full_financing_is_rejected() {
        let err = compute_roi(500_000.0, 2_000.0, 5_000.0, 500_000.0, 4.0).unwrap_err();
        assert_eq!(err.field(), "loanAmount");
        assert!(compute_roi(500_000.0, 2_000.0, 5_000.0, 600_000.0, 4.0).is_err());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(compute_roi(0.0, 2_000.0, 5_000.0, 0.0, 0.0).is_err());
        assert!(compute_roi(500_000.0, 0.0, 5_000.0, 0.0, 0.0).is_err());
        assert!(compute_roi(500_000.0, 2_000.0, -1.0, 0.0, 0.0).is_err());
        assert!(compute_roi(500_000.0, 2_000.0, 5_000.0, -1.0, 0.0).is_err());
        assert!(compute_roi(500_000.0, 2_000.0, 5_000.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn test_overflowing_yield_is_rejected() {
        let err = compute_roi(1e-306, 10_000.0, 120_000.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "grossYield");

        let err = compute_roi(1e-300, 1.0, 1e10, 0.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "netYield");
    }

    #[test]
    fn test_parse_input() {
        let input = RoiInput::parse("500,000", "2,000", "5,000", "0", "0").unwrap();
        assert_relative_eq!(
            input.compute().unwrap().gross_yield_percent,
            4.8,
            epsilon = 1e-12
        );
    }
}
