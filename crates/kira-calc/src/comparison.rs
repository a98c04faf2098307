//! Side-by-side comparison of two loan offers for the same amount.

use kira_core::CalcResult;
use serde::{Deserialize, Serialize};

use crate::loan::{compute_loan, LoanResult};

/// Rate and term of one loan offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Loan term in years
    pub term_years: f64,
}

impl LoanTerms {
    /// Creates loan terms.
    pub fn new(annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            annual_rate_percent,
            term_years,
        }
    }
}

/// Identifies one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// The first offer
    A,
    /// The second offer
    B,
}

/// Two loan results over the same principal, with B − A differences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    /// Result for the first offer
    pub a: LoanResult,
    /// Result for the second offer
    pub b: LoanResult,
    /// B monthly payment − A monthly payment
    pub monthly_payment_difference: f64,
    /// B total payment − A total payment
    pub total_payment_difference: f64,
    /// B total interest − A total interest
    pub total_interest_difference: f64,
}

impl LoanComparison {
    /// The offer with the lower total cost, or `None` on a tie.
    #[must_use]
    pub fn cheaper(&self) -> Option<Scenario> {
        if self.total_payment_difference > 0.0 {
            Some(Scenario::A)
        } else if self.total_payment_difference < 0.0 {
            Some(Scenario::B)
        } else {
            None
        }
    }

    /// Returns the result for one side.
    #[must_use]
    pub fn scenario(&self, scenario: Scenario) -> &LoanResult {
        match scenario {
            Scenario::A => &self.a,
            Scenario::B => &self.b,
        }
    }
}

/// Compare two loan offers for the same principal.
///
/// Both offers are validated exactly as [`compute_loan`] validates them; if
/// either is invalid, the whole comparison is.
pub fn compare_loans(principal: f64, a: LoanTerms, b: LoanTerms) -> CalcResult<LoanComparison> {
    let a = compute_loan(principal, a.annual_rate_percent, a.term_years)?;
    let b = compute_loan(principal, b.annual_rate_percent, b.term_years)?;

    Ok(LoanComparison {
        monthly_payment_difference: b.monthly_payment - a.monthly_payment,
        total_payment_difference: b.total_payment - a.total_payment,
        total_interest_difference: b.total_interest - a.total_interest,
        a,
        b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_longer_term_costs_more_interest() {
        let cmp = compare_loans(
            300_000.0,
            LoanTerms::new(4.0, 20.0),
            LoanTerms::new(4.0, 30.0),
        )
        .unwrap();

        // Longer term: lower monthly payment, more interest overall
        assert!(cmp.monthly_payment_difference < 0.0);
        assert!(cmp.total_interest_difference > 0.0);
        assert_eq!(cmp.cheaper(), Some(Scenario::A));
    }

    #[test]
    fn test_lower_rate_is_cheaper() {
        let cmp = compare_loans(
            200_000.0,
            LoanTerms::new(4.5, 25.0),
            LoanTerms::new(3.9, 25.0),
        )
        .unwrap();

        assert_eq!(cmp.cheaper(), Some(Scenario::B));
        assert_relative_eq!(
            cmp.total_payment_difference,
            cmp.total_interest_difference,
            epsilon = 1e-6
        );
        assert_eq!(cmp.scenario(Scenario::B).annual_rate_percent, 3.9);
    }

    #[test]
    fn test_identical_offers_tie() {
        let terms = LoanTerms::new(5.0, 10.0);
        let cmp = compare_loans(100_000.0, terms, terms).unwrap();
        assert_eq!(cmp.cheaper(), None);
        assert_eq!(cmp.monthly_payment_difference, 0.0);
    }

    #[test]
    fn test_invalid_offer_invalidates_comparison() {
        let offer = LoanTerms::new(5.0, 10.0);
        assert!(compare_loans(100_000.0, offer, LoanTerms::new(0.0, 10.0)).is_err());
        assert!(compare_loans(0.0, offer, LoanTerms::new(4.0, 10.0)).is_err());
    }
}
