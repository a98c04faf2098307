//! Compare command implementation.
//!
//! Compares two rate/term offers for the same loan amount.

use anyhow::Result;
use clap::Args;

use kira_calc::{compare_loans, LoanComparison, LoanTerms, Scenario};
use kira_core::input::parse_amount;
use kira_storage::CalculatorForm;

use crate::commands::Context;
use crate::output::{print_report, KeyValue};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Loan amount (e.g., 300,000)
    #[arg(long)]
    pub amount: Option<String>,

    /// Annual interest rate of offer A, in percent
    #[arg(long)]
    pub rate1: Option<String>,

    /// Term of offer A, in years
    #[arg(long)]
    pub term1: Option<String>,

    /// Annual interest rate of offer B, in percent
    #[arg(long)]
    pub rate2: Option<String>,

    /// Term of offer B, in years
    #[arg(long)]
    pub term2: Option<String>,
}

fn comparison_rows(ctx: &Context, comparison: &LoanComparison) -> Vec<KeyValue> {
    let (a, b) = (&comparison.a, &comparison.b);
    let verdict = match comparison.cheaper() {
        Some(Scenario::A) => "Offer A".to_string(),
        Some(Scenario::B) => "Offer B".to_string(),
        None => "Same total cost".to_string(),
    };

    vec![
        KeyValue::new("Loan Amount", ctx.money(a.principal)),
        KeyValue::new(
            "Offer A",
            format!("{} over {} years", ctx.percent(a.annual_rate_percent), a.term_years),
        ),
        KeyValue::new(
            "Offer B",
            format!("{} over {} years", ctx.percent(b.annual_rate_percent), b.term_years),
        ),
        KeyValue::new("Monthly Payment A", ctx.money(a.monthly_payment)),
        KeyValue::new("Monthly Payment B", ctx.money(b.monthly_payment)),
        KeyValue::new(
            "Monthly Difference (B − A)",
            ctx.money(comparison.monthly_payment_difference),
        ),
        KeyValue::new("Total Interest A", ctx.money(a.total_interest)),
        KeyValue::new("Total Interest B", ctx.money(b.total_interest)),
        KeyValue::new(
            "Interest Difference (B − A)",
            ctx.money(comparison.total_interest_difference),
        ),
        KeyValue::new(
            "Total Difference (B − A)",
            ctx.money(comparison.total_payment_difference),
        ),
        KeyValue::new("Cheaper Overall", verdict),
    ]
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, ctx: &Context) -> Result<()> {
    let mut inputs = ctx.inputs(CalculatorForm::Comparison)?;
    let amount = inputs.require("loanAmount", "--amount", args.amount)?;
    let rate1 = inputs.require("interestRate1", "--rate1", args.rate1)?;
    let term1 = inputs.require("loanTerm1", "--term1", args.term1)?;
    let rate2 = inputs.require("interestRate2", "--rate2", args.rate2)?;
    let term2 = inputs.require("loanTerm2", "--term2", args.term2)?;

    let principal = parse_amount(&amount, "loanAmount")?;
    let a = LoanTerms::new(
        parse_amount(&rate1, "interestRate1")?,
        parse_amount(&term1, "loanTerm1")?,
    );
    let b = LoanTerms::new(
        parse_amount(&rate2, "interestRate2")?,
        parse_amount(&term2, "loanTerm2")?,
    );

    let comparison = compare_loans(principal, a, b)?;
    inputs.remember(ctx)?;

    print_report(
        "Loan Comparison",
        &comparison_rows(ctx, &comparison),
        &comparison,
        ctx.format,
        ctx.quiet,
    )
}
