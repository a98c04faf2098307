//! ROI command implementation.

use anyhow::Result;
use clap::Args;

use kira_calc::{RoiInput, RoiResult};
use kira_storage::CalculatorForm;

use crate::commands::Context;
use crate::output::{print_report, KeyValue};

/// Arguments for the roi command.
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Property price
    #[arg(long)]
    pub price: Option<String>,

    /// Monthly rent received
    #[arg(long)]
    pub rental: Option<String>,

    /// Annual expenses (maintenance, insurance, assessment)
    #[arg(long)]
    pub expenses: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub loan: Option<String>,

    /// Annual loan interest rate in percent
    #[arg(long)]
    pub rate: Option<String>,
}

fn roi_rows(ctx: &Context, result: &RoiResult) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Annual Rental Income", ctx.money(result.annual_rental_income)),
        KeyValue::new("Annual Interest Cost", ctx.money(result.annual_interest_cost)),
        KeyValue::new("Capital Invested", ctx.money(result.capital_cost)),
        KeyValue::new("Gross Yield", ctx.percent(result.gross_yield_percent)),
        KeyValue::new("Net Yield", ctx.percent(result.net_yield_percent)),
        KeyValue::new(
            "Net Leveraged Yield",
            ctx.percent(result.net_leveraged_yield_percent),
        ),
    ]
}

/// Execute the roi command.
pub fn execute(args: RoiArgs, ctx: &Context) -> Result<()> {
    let mut inputs = ctx.inputs(CalculatorForm::Roi)?;
    let price = inputs.require("propertyPrice", "--price", args.price)?;
    let rental = inputs.require("monthlyRental", "--rental", args.rental)?;
    let expenses = inputs.require("annualExpenses", "--expenses", args.expenses)?;
    let loan = inputs.require("loanAmount", "--loan", args.loan)?;
    let rate = inputs.require("interestRate", "--rate", args.rate)?;

    let result = RoiInput::parse(&price, &rental, &expenses, &loan, &rate)?.compute()?;
    inputs.remember(ctx)?;

    print_report("Rental ROI", &roi_rows(ctx, &result), &result, ctx.format, ctx.quiet)
}
