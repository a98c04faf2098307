//! Month-by-month amortization schedules.
//!
//! The schedule reuses the loan's level monthly payment. Each month accrues
//! interest on the outstanding balance and applies the rest of the payment to
//! principal. The last row settles whatever balance remains, so the schedule
//! always ends at exactly zero.

use kira_core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

use crate::loan::check_loan;

/// Longest schedule generated, in months (100 years).
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Absorbs float noise in `years × 12` (e.g. `120.00000000000001`).
const PERIOD_EPSILON: f64 = 1e-9;

/// A single month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number, starting at 1
    pub month: u32,
    /// Amount paid this month
    pub payment: f64,
    /// Interest accrued on the opening balance
    pub interest_portion: f64,
    /// Part of the payment applied to principal
    pub principal_portion: f64,
    /// Balance outstanding after the payment
    pub remaining_balance: f64,
}

/// Full amortization schedule for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Amount borrowed
    pub principal: f64,
    /// Annual interest rate in percent
    pub annual_rate_percent: f64,
    /// Level monthly payment
    pub monthly_payment: f64,
    /// One row per month, in order
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Returns the number of monthly rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows in month order.
    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationRow> {
        self.rows.iter()
    }

    /// Returns the row for a given month (1-based).
    #[must_use]
    pub fn month(&self, month: u32) -> Option<&AmortizationRow> {
        month
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx as usize))
    }

    /// Remaining balance after each month, for charting.
    #[must_use]
    pub fn balances(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.remaining_balance).collect()
    }

    /// Total interest paid over the schedule.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest_portion).sum()
    }

    /// Total principal repaid over the schedule.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|row| row.principal_portion).sum()
    }

    /// Total of all payments.
    #[must_use]
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|row| row.payment).sum()
    }

    /// Balance after the last row (zero for any generated schedule).
    #[must_use]
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map_or(self.principal, |row| row.remaining_balance)
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Generate the monthly amortization schedule for a loan.
///
/// Validation matches [`compute_loan`](crate::compute_loan). The schedule has
/// `ceil(term_years × 12)` rows; a fractional final month is a partial payment.
/// A truncated `floor(term_years × 12)` schedule would stop with principal still
/// owed, so the extra row is kept and the balance always ends at zero.
///
/// # Errors
///
/// `InvalidInput` when an argument is outside its domain or the schedule would
/// exceed [`MAX_SCHEDULE_MONTHS`].
pub fn generate_amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> CalcResult<AmortizationSchedule> {
    let loan = check_loan(principal, annual_rate_percent, term_years)?;

    let row_count = (loan.payment_count - PERIOD_EPSILON).ceil();
    if row_count > f64::from(MAX_SCHEDULE_MONTHS) {
        return Err(CalcError::invalid_input(
            "loanTerm",
            format!(
                "schedule of {} months exceeds the {} month limit",
                row_count, MAX_SCHEDULE_MONTHS
            ),
        ));
    }
    let row_count = row_count.max(1.0) as u32;

    let mut rows = Vec::with_capacity(row_count as usize);
    let mut balance = loan.principal;

    for month in 1..=row_count {
        let interest = balance * loan.monthly_rate;
        let (payment, principal_portion) = if month == row_count {
            (interest + balance, balance)
        } else {
            (loan.monthly_payment, loan.monthly_payment - interest)
        };
        balance = if month == row_count {
            0.0
        } else {
            (balance - principal_portion).max(0.0)
        };

        rows.push(AmortizationRow {
            month,
            payment,
            interest_portion: interest,
            principal_portion,
            remaining_balance: balance,
        });
    }

    log::trace!(
        "generated {} month schedule for principal {}",
        rows.len(),
        loan.principal
    );

    Ok(AmortizationSchedule {
        principal: loan.principal,
        annual_rate_percent: loan.annual_rate_percent,
        monthly_payment: loan.monthly_payment,
        rows,
    })
}
