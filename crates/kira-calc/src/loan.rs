//! Amortized loan payment.
//!
//! Uses the standard annuity formula with monthly compounding:
//!
//! ```text
//! r = annual rate / 100 / 12
//! n = term in years × 12
//! M = P × r × (1 + r)^n / ((1 + r)^n − 1)
//! ```

use kira_core::input::parse_amount;
use kira_core::validation::{ensure_finite, ensure_positive};
use kira_core::CalcResult;
use serde::{Deserialize, Serialize};

pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts an annual percentage rate into a monthly fraction.
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR
}

/// Level payment that retires `principal` over `periods` at `rate` per period.
pub(crate) fn annuity_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    let growth = (1.0 + rate).powf(periods);
    principal * rate * growth / (growth - 1.0)
}

/// Validated loan parameters shared by the loan, schedule, and comparison calculators.
pub(crate) struct LoanTermsChecked {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub monthly_rate: f64,
    pub payment_count: f64,
    pub monthly_payment: f64,
}

/// Applies the loan domain: principal, rate, and term must all be positive.
///
/// A zero rate or zero term is rejected rather than treated as a limit case.
pub(crate) fn check_loan(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> CalcResult<LoanTermsChecked> {
    let principal = ensure_positive(principal, "loanAmount")?;
    let annual_rate_percent = ensure_positive(annual_rate_percent, "interestRate")?;
    let term_years = ensure_positive(term_years, "loanTerm")?;

    let monthly_rate = monthly_rate(annual_rate_percent);
    let payment_count = term_years * MONTHS_PER_YEAR;
    let monthly_payment = ensure_finite(
        annuity_payment(principal, monthly_rate, payment_count),
        "monthlyPayment",
    )?;

    Ok(LoanTermsChecked {
        principal,
        annual_rate_percent,
        term_years,
        monthly_rate,
        payment_count,
        monthly_payment,
    })
}

/// Raw loan inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,
    /// Annual interest rate in percent (e.g. 4.5 for 4.5%)
    pub annual_rate_percent: f64,
    /// Loan term in years (fractional years allowed)
    pub term_years: f64,
}

impl LoanInput {
    /// Creates loan inputs from numeric values.
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Parses loan inputs from raw form fields.
    pub fn parse(loan_amount: &str, interest_rate: &str, loan_term: &str) -> CalcResult<Self> {
        Ok(Self::new(
            parse_amount(loan_amount, "loanAmount")?,
            parse_amount(interest_rate, "interestRate")?,
            parse_amount(loan_term, "loanTerm")?,
        ))
    }

    /// Computes the loan result for these inputs.
    pub fn compute(&self) -> CalcResult<LoanResult> {
        compute_loan(self.principal, self.annual_rate_percent, self.term_years)
    }
}

/// Result of a loan calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Amount borrowed
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Loan term in years
    pub term_years: f64,
    /// Number of monthly payments (term × 12, may be fractional)
    pub payment_count: f64,
    /// Level monthly payment
    pub monthly_payment: f64,
    /// Monthly payment × 12
    pub annual_payment: f64,
    /// Monthly payment × number of payments
    pub total_payment: f64,
    /// Total payment − principal
    pub total_interest: f64,
    /// Annual debt service as a percentage of principal
    pub annual_mortgage_constant_percent: f64,
}

impl LoanResult {
    /// Splits the total payment into principal and interest shares.
    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::new(self.principal, self.total_interest)
    }
}

/// Share of principal and interest in the total amount repaid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Principal repaid
    pub principal: f64,
    /// Interest paid
    pub interest: f64,
    /// Principal as a percentage of the total
    pub principal_share_percent: f64,
    /// Interest as a percentage of the total
    pub interest_share_percent: f64,
}

impl PaymentBreakdown {
    /// Builds a breakdown from principal and interest amounts.
    ///
    /// Both shares are zero when the total is zero.
    pub fn new(principal: f64, interest: f64) -> Self {
        let total = principal + interest;
        let (principal_share_percent, interest_share_percent) = if total > 0.0 {
            (principal / total * 100.0, interest / total * 100.0)
        } else {
            (0.0, 0.0)
        };
        Self {
            principal,
            interest,
            principal_share_percent,
            interest_share_percent,
        }
    }
}

/// Calculate the monthly payment and totals for an amortized loan.
///
/// # Arguments
///
/// * `principal` - Amount borrowed, must be positive
/// * `annual_rate_percent` - Annual rate in percent, must be positive
/// * `term_years` - Term in years, must be positive
///
/// # Returns
///
/// [`LoanResult`], or `InvalidInput` when any argument is outside its domain.
pub fn compute_loan(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> CalcResult<LoanResult> {
    let loan = check_loan(principal, annual_rate_percent, term_years)?;

    let total_payment = loan.monthly_payment * loan.payment_count;
    let total_interest = total_payment - loan.principal;
    let annual_payment = loan.monthly_payment * MONTHS_PER_YEAR;
    let annual_mortgage_constant_percent = annual_payment / loan.principal * 100.0;

    Ok(LoanResult {
        principal: loan.principal,
        annual_rate_percent: loan.annual_rate_percent,
        term_years: loan.term_years,
        payment_count: loan.payment_count,
        monthly_payment: loan.monthly_payment,
        annual_payment,
        total_payment: ensure_finite(total_payment, "totalPayment")?,
        total_interest,
        annual_mortgage_constant_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_loan() {
        // 100,000 at 5% over 10 years
        let loan = compute_loan(100_000.0, 5.0, 10.0).unwrap();

        assert_relative_eq!(loan.payment_count, 120.0);
        assert_relative_eq!(loan.monthly_payment, 1060.66, epsilon = 0.005);
        assert_relative_eq!(loan.total_payment, 127_278.62, epsilon = 0.01);
        assert_relative_eq!(loan.total_interest, 27_278.62, epsilon = 0.01);
        assert_relative_eq!(loan.annual_mortgage_constant_percent, 12.7279, epsilon = 0.0001);
        assert_relative_eq!(loan.annual_payment, loan.monthly_payment * 12.0);
    }

    #[test]
    fn test_totals_are_consistent() {
        let loan = compute_loan(350_000.0, 4.25, 35.0).unwrap();
        assert_eq!(loan.total_payment, loan.monthly_payment * loan.payment_count);
        assert_eq!(loan.total_interest, loan.total_payment - loan.principal);
        assert!(loan.total_interest >= 0.0);
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let err = compute_loan(100_000.0, 0.0, 10.0).unwrap_err();
        assert_eq!(err.field(), "interestRate");
    }

    #[test]
    fn test_zero_term_is_rejected() {
        let err = compute_loan(100_000.0, 5.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "loanTerm");
    }

    #[test]
    fn test_non_positive_principal_is_rejected() {
        assert!(compute_loan(0.0, 5.0, 10.0).is_err());
        assert!(compute_loan(-1.0, 5.0, 10.0).is_err());
        assert!(compute_loan(f64::NAN, 5.0, 10.0).is_err());
    }

    #[test]
    fn test_overflowing_term_is_rejected() {
        // (1 + r)^n overflows to infinity, which would yield NaN
        assert!(compute_loan(100_000.0, 5.0, 1e12).is_err());
    }

    #[test]
    fn test_fractional_term() {
        let loan = compute_loan(10_000.0, 6.0, 1.5).unwrap();
        assert_relative_eq!(loan.payment_count, 18.0);
        assert!(loan.monthly_payment > 10_000.0 / 18.0);
    }

    #[test]
    fn test_idempotent() {
        let a = compute_loan(123_456.78, 3.95, 27.0).unwrap();
        let b = compute_loan(123_456.78, 3.95, 27.0).unwrap();
        assert_eq!(a.monthly_payment.to_bits(), b.monthly_payment.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_breakdown_shares() {
        let loan = compute_loan(100_000.0, 5.0, 10.0).unwrap();
        let breakdown = loan.breakdown();
        assert_relative_eq!(
            breakdown.principal_share_percent + breakdown.interest_share_percent,
            100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(breakdown.principal_share_percent, 78.5678, epsilon = 0.001);

        let empty = PaymentBreakdown::new(0.0, 0.0);
        assert_eq!(empty.principal_share_percent, 0.0);
    }

    #[test]
    fn test_parse_input() {
        let input = LoanInput::parse("100,000", "5", "10").unwrap();
        assert_eq!(input, LoanInput::new(100_000.0, 5.0, 10.0));
        assert!(input.compute().is_ok());

        let err = LoanInput::parse("100,000", "five", "10").unwrap_err();
        assert_eq!(err.field(), "interestRate");
    }
}
