//! Property tax command implementation.
//!
//! Uses the `[property_tax]` schedule from the configuration when present.

use anyhow::Result;
use clap::Args;

use kira_calc::{compute_property_tax_with, PropertyTaxInput, PropertyTaxResult};
use kira_storage::CalculatorForm;

use crate::commands::Context;
use crate::output::{print_report, KeyValue};

/// Arguments for the property-tax command.
#[derive(Args, Debug)]
pub struct PropertyTaxArgs {
    /// Property price
    #[arg(long)]
    pub price: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub loan: Option<String>,
}

fn property_tax_rows(
    ctx: &Context,
    input: &PropertyTaxInput,
    result: &PropertyTaxResult,
) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Property Price", ctx.money(input.property_price)),
        KeyValue::new("Loan Amount", ctx.money(input.loan_amount)),
        KeyValue::new("Legal Fee", ctx.money(result.legal_fee)),
        KeyValue::new("Transfer Stamp Duty", ctx.money(result.transfer_stamp_duty)),
        KeyValue::new("Loan Stamp Duty", ctx.money(result.loan_stamp_duty)),
        KeyValue::new("Total Cost", ctx.money(result.total_cost)),
    ]
}

/// Execute the property-tax command.
pub fn execute(args: PropertyTaxArgs, ctx: &Context) -> Result<()> {
    let mut inputs = ctx.inputs(CalculatorForm::PropertyTax)?;
    let price = inputs.require("propertyPrice", "--price", args.price)?;
    let loan = inputs.require("loanAmount", "--loan", args.loan)?;

    let input = PropertyTaxInput::parse(&price, &loan)?;
    let schedule = ctx.config.property_tax_schedule();
    let result = compute_property_tax_with(&schedule, input.property_price, input.loan_amount)?;
    inputs.remember(ctx)?;

    print_report(
        "Property Purchase Costs",
        &property_tax_rows(ctx, &input, &result),
        &result,
        ctx.format,
        ctx.quiet,
    )
}
