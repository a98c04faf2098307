//! Schedule command implementation.
//!
//! Prints the month-by-month amortization schedule of a loan.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kira_calc::{generate_amortization_schedule, AmortizationSchedule};
use kira_core::formatting::format_number;

use crate::cli::OutputFormat;
use crate::commands::loan::LoanFields;
use crate::commands::Context;
use crate::output::{print_header, print_json, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanFields,
}

/// One formatted schedule row.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let (input, inputs) = args.loan.resolve(ctx)?;
    let schedule = generate_amortization_schedule(
        input.principal,
        input.annual_rate_percent,
        input.term_years,
    )?;
    inputs.remember(ctx)?;

    print(ctx, &schedule)
}

/// Prints a schedule in the context's format.
pub fn print(ctx: &Context, schedule: &AmortizationSchedule) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(schedule),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in schedule {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!(
                    "Amortization Schedule ({} months, {} per month)",
                    schedule.len(),
                    ctx.money(schedule.monthly_payment)
                ));
            }
            let rows: Vec<ScheduleRow> = schedule
                .iter()
                .map(|row| ScheduleRow {
                    month: row.month,
                    payment: format_number(row.payment),
                    interest: format_number(row.interest_portion),
                    principal: format_number(row.principal_portion),
                    balance: format_number(row.remaining_balance),
                })
                .collect();
            print_output(&rows, OutputFormat::Table)?;

            if !ctx.quiet {
                println!(
                    "Total interest {}, total paid {}",
                    ctx.money(schedule.total_interest()),
                    ctx.money(schedule.total_paid())
                );
            }
            Ok(())
        }
    }
}
