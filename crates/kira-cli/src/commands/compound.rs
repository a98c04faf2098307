//! Compound command implementation.

use anyhow::Result;
use clap::Args;

use kira_calc::{CompoundInterestInput, CompoundInterestResult};
use kira_core::CompoundingFrequency;
use kira_storage::CalculatorForm;

use crate::commands::Context;
use crate::output::{print_report, KeyValue};

/// Arguments for the compound command.
#[derive(Args, Debug)]
pub struct CompoundArgs {
    /// Initial deposit
    #[arg(long)]
    pub principal: Option<String>,

    /// Amount added every month
    #[arg(long)]
    pub deposit: Option<String>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<String>,

    /// Term in months
    #[arg(long)]
    pub months: Option<String>,

    /// Compounding: 0 (none), 1, 2, 4, 12, 52, 365, or a name such as
    /// "monthly" [default: monthly]
    #[arg(long)]
    pub frequency: Option<String>,
}

fn compound_rows(ctx: &Context, result: &CompoundInterestResult) -> Vec<KeyValue> {
    let breakdown = result.breakdown();
    vec![
        KeyValue::new("Compounding", result.frequency.to_string()),
        KeyValue::new(
            "Total Contributed",
            ctx.money(result.total_principal_contributed),
        ),
        KeyValue::new("Interest Earned", ctx.money(result.interest_earned)),
        KeyValue::new("Maturity Value", ctx.money(result.maturity_value)),
        KeyValue::new(
            "Effective Annual Yield",
            ctx.percent(result.effective_annual_yield_percent),
        ),
        KeyValue::new("Interest Share", ctx.percent(breakdown.interest_share_percent)),
    ]
}

/// Execute the compound command.
pub fn execute(args: CompoundArgs, ctx: &Context) -> Result<()> {
    let mut inputs = ctx.inputs(CalculatorForm::Compound)?;
    let principal = inputs.require("principal", "--principal", args.principal)?;
    let deposit = inputs.require("monthlyDeposit", "--deposit", args.deposit)?;
    let rate = inputs.require("interestRate", "--rate", args.rate)?;
    let months = inputs.require("termMonths", "--months", args.months)?;
    let frequency = inputs
        .optional("compoundFrequency", args.frequency)
        .unwrap_or_else(|| CompoundingFrequency::default().periods_per_year().to_string());

    let result =
        CompoundInterestInput::parse(&principal, &deposit, &rate, &months, &frequency)?.compute()?;
    inputs.remember(ctx)?;

    print_report(
        "Compound Interest",
        &compound_rows(ctx, &result),
        &result,
        ctx.format,
        ctx.quiet,
    )
}
