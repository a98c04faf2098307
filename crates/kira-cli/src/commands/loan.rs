//! Loan command implementation.
//!
//! Calculates the monthly payment, totals, and mortgage constant of a loan.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use kira_calc::{AmortizationSchedule, LoanInput, LoanResult};
use kira_storage::CalculatorForm;

use crate::cli::OutputFormat;
use crate::commands::{schedule, Context, FormInputs};
use crate::output::{print_report, KeyValue};

/// Loan amount, rate, and term, shared by `loan` and `schedule`.
#[derive(Args, Debug)]
pub struct LoanFields {
    /// Loan amount (e.g., 100,000)
    #[arg(long)]
    pub amount: Option<String>,

    /// Annual interest rate in percent (e.g., 4.5)
    #[arg(long)]
    pub rate: Option<String>,

    /// Loan term in years
    #[arg(long)]
    pub term: Option<String>,
}

impl LoanFields {
    /// Resolves the fields against the saved loan form.
    pub fn resolve(self, ctx: &Context) -> Result<(LoanInput, FormInputs)> {
        let mut inputs = ctx.inputs(CalculatorForm::Loan)?;
        let amount = inputs.require("loanAmount", "--amount", self.amount)?;
        let rate = inputs.require("interestRate", "--rate", self.rate)?;
        let term = inputs.require("loanTerm", "--term", self.term)?;
        Ok((LoanInput::parse(&amount, &rate, &term)?, inputs))
    }
}

/// Arguments for the loan command.
#[derive(Args, Debug)]
pub struct LoanArgs {
    #[command(flatten)]
    pub loan: LoanFields,

    /// Also print the amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

/// JSON shape of `loan --schedule`.
#[derive(Serialize)]
struct LoanReport<'a> {
    loan: &'a LoanResult,
    schedule: &'a AmortizationSchedule,
}

/// Formatted rows for a loan result.
pub fn loan_rows(ctx: &Context, loan: &LoanResult) -> Vec<KeyValue> {
    let breakdown = loan.breakdown();
    vec![
        KeyValue::new("Loan Amount", ctx.money(loan.principal)),
        KeyValue::new("Interest Rate", ctx.percent(loan.annual_rate_percent)),
        KeyValue::new("Loan Term", format!("{} years", loan.term_years)),
        KeyValue::new("Monthly Payment", ctx.money(loan.monthly_payment)),
        KeyValue::new("Annual Payment", ctx.money(loan.annual_payment)),
        KeyValue::new("Total Payment", ctx.money(loan.total_payment)),
        KeyValue::new("Total Interest", ctx.money(loan.total_interest)),
        KeyValue::new(
            "Mortgage Constant",
            ctx.percent(loan.annual_mortgage_constant_percent),
        ),
        KeyValue::new("Principal Share", ctx.percent(breakdown.principal_share_percent)),
        KeyValue::new("Interest Share", ctx.percent(breakdown.interest_share_percent)),
    ]
}

/// Execute the loan command.
pub fn execute(args: LoanArgs, ctx: &Context) -> Result<()> {
    let (input, inputs) = args.loan.resolve(ctx)?;
    let loan = input.compute()?;
    let schedule = if args.schedule {
        Some(kira_calc::generate_amortization_schedule(
            input.principal,
            input.annual_rate_percent,
            input.term_years,
        )?)
    } else {
        None
    };
    inputs.remember(ctx)?;

    match (ctx.format, schedule) {
        (OutputFormat::Json, Some(schedule)) => {
            crate::output::print_json(&LoanReport {
                loan: &loan,
                schedule: &schedule,
            })
        }
        (_, schedule) => {
            print_report("Loan", &loan_rows(ctx, &loan), &loan, ctx.format, ctx.quiet)?;
            match schedule {
                Some(schedule) => print_schedule(ctx, &schedule),
                None => Ok(()),
            }
        }
    }
}

fn print_schedule(ctx: &Context, schedule: &AmortizationSchedule) -> Result<()> {
    if ctx.format == OutputFormat::Csv {
        println!();
    }
    schedule::print(ctx, schedule)
}
