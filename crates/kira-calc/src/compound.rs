//! Compound interest with a regular monthly deposit.
//!
//! Two branches, selected by [`CompoundingFrequency`]:
//!
//! - **No compounding**: `A = P(1 + rt) + M·months·(1 + rt/2)`
//! - **n periods per year**: `A = P(1 + i)^k + M·((1 + i)^k − 1)/i·(1 + i)`,
//!   with `i = r/n` and `k = n·t`
//!
//! where `r` is the annual rate as a fraction and `t` the term in years. The
//! deposit term is an annuity-due over the `k` compounding periods.

use kira_core::input::parse_amount;
use kira_core::validation::{ensure_finite, ensure_non_negative, ensure_positive};
use kira_core::{CalcError, CalcResult, CompoundingFrequency};
use serde::{Deserialize, Serialize};

use crate::loan::{PaymentBreakdown, MONTHS_PER_YEAR};

/// Raw compound interest inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// Initial deposit
    pub principal: f64,
    /// Amount added every month
    pub monthly_deposit: f64,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Investment term in months
    pub term_months: f64,
    /// How often interest compounds
    pub frequency: CompoundingFrequency,
}

impl CompoundInterestInput {
    /// Parses compound interest inputs from raw form fields.
    ///
    /// `frequency` accepts a period count (`"12"`) or a name (`"monthly"`).
    pub fn parse(
        principal: &str,
        monthly_deposit: &str,
        interest_rate: &str,
        term_months: &str,
        frequency: &str,
    ) -> CalcResult<Self> {
        Ok(Self {
            principal: parse_amount(principal, "principal")?,
            monthly_deposit: parse_amount(monthly_deposit, "monthlyDeposit")?,
            annual_rate_percent: parse_amount(interest_rate, "interestRate")?,
            term_months: parse_amount(term_months, "termMonths")?,
            frequency: frequency.parse()?,
        })
    }

    /// Computes the compound interest result for these inputs.
    pub fn compute(&self) -> CalcResult<CompoundInterestResult> {
        compute_compound_interest(
            self.principal,
            self.monthly_deposit,
            self.annual_rate_percent,
            self.term_months,
            self.frequency,
        )
    }
}

/// Result of a compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Compounding frequency used
    pub frequency: CompoundingFrequency,
    /// Initial deposit plus all monthly deposits
    pub total_principal_contributed: f64,
    /// Maturity value − total contributed
    pub interest_earned: f64,
    /// Value at the end of the term
    pub maturity_value: f64,
    /// Annual percentage yield
    pub effective_annual_yield_percent: f64,
}

impl CompoundInterestResult {
    /// Splits the maturity value into contributions and interest.
    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::new(self.total_principal_contributed, self.interest_earned)
    }
}

/// Calculate the maturity value of a deposit plus monthly contributions.
///
/// # Arguments
///
/// * `principal` - Initial deposit, not negative
/// * `monthly_deposit` - Monthly contribution, not negative
/// * `annual_rate_percent` - Annual rate in percent, not negative
/// * `term_months` - Term in months, must be positive
/// * `frequency` - Compounding frequency
///
/// # Errors
///
/// `InvalidInput` for out-of-domain arguments, and for a zero rate when
/// interest compounds (the annuity factor would be 0/0).
pub fn compute_compound_interest(
    principal: f64,
    monthly_deposit: f64,
    annual_rate_percent: f64,
    term_months: f64,
    frequency: CompoundingFrequency,
) -> CalcResult<CompoundInterestResult> {
    let principal = ensure_non_negative(principal, "principal")?;
    let deposit = ensure_non_negative(monthly_deposit, "monthlyDeposit")?;
    let annual_rate_percent = ensure_non_negative(annual_rate_percent, "interestRate")?;
    let term_months = ensure_positive(term_months, "termMonths")?;

    let r = annual_rate_percent / 100.0;
    let t = term_months / MONTHS_PER_YEAR;
    let total_contributed = principal + deposit * term_months;

    let (maturity_value, effective_yield) = if frequency.is_simple() {
        let rt = r * t;
        let value = principal * (1.0 + rt) + deposit * term_months * (1.0 + rt / 2.0);
        (value, r * 100.0)
    } else {
        if r == 0.0 {
            return Err(CalcError::invalid_input(
                "interestRate",
                format!("must be greater than zero when compounding {}", frequency),
            ));
        }
        let n = f64::from(frequency.periods_per_year());
        let i = r / n;
        let k = n * t;
        let growth = (1.0 + i).powf(k);

        let principal_growth = principal * growth;
        let deposit_growth = deposit * ((growth - 1.0) / i) * (1.0 + i);
        let apy = ((1.0 + r / n).powf(n) - 1.0) * 100.0;
        (principal_growth + deposit_growth, apy)
    };

    let maturity_value = ensure_finite(maturity_value, "maturityValue")?;
    let effective_annual_yield_percent = ensure_finite(effective_yield, "effectiveAnnualYield")?;

    Ok(CompoundInterestResult {
        frequency,
        total_principal_contributed: total_contributed,
        interest_earned: maturity_value - total_contributed,
        maturity_value,
        effective_annual_yield_percent,
    })
}
