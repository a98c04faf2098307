//! Inputs command implementation.
//!
//! Shows or clears the calculator inputs saved by previous runs.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use kira_storage::{CalculatorForm, FormSnapshot};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_info, print_json, print_output, print_success};

/// Arguments for the inputs command.
#[derive(Args, Debug)]
pub struct InputsArgs {
    #[command(subcommand)]
    pub command: InputsCommand,
}

/// Inputs subcommands.
#[derive(Subcommand, Debug)]
pub enum InputsCommand {
    /// Show saved inputs
    Show(ShowArgs),

    /// Clear saved inputs
    Clear(ClearArgs),
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Form to show (loan, comparison, compound, property-tax, roi, fuel);
    /// all forms if omitted
    pub form: Option<CalculatorForm>,
}

/// Arguments for clear subcommand.
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Form to clear
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub form: Option<CalculatorForm>,

    /// Clear every form
    #[arg(long)]
    pub all: bool,
}

/// One saved value, for table and CSV output.
#[derive(Debug, Serialize, Tabled)]
struct SavedInput {
    #[tabled(rename = "Form")]
    form: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Execute the inputs command.
pub fn execute(args: InputsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        InputsCommand::Show(show_args) => execute_show(&show_args, ctx),
        InputsCommand::Clear(clear_args) => execute_clear(&clear_args, ctx),
    }
}

fn selected_forms(form: Option<CalculatorForm>) -> Vec<CalculatorForm> {
    form.map_or_else(|| CalculatorForm::ALL.to_vec(), |form| vec![form])
}

/// Show saved inputs.
fn execute_show(args: &ShowArgs, ctx: &Context) -> Result<()> {
    let snapshots = selected_forms(args.form)
        .into_iter()
        .map(|form| ctx.forms.load(form))
        .collect::<Result<Vec<FormSnapshot>, _>>()?;
    let saved: Vec<&FormSnapshot> = snapshots.iter().filter(|s| !s.is_empty()).collect();

    if ctx.format == OutputFormat::Json {
        return print_json(&saved);
    }

    let rows: Vec<SavedInput> = saved
        .iter()
        .flat_map(|snapshot| {
            snapshot.values.iter().map(|(field, value)| SavedInput {
                form: snapshot.form.to_string(),
                field: field.clone(),
                value: value.clone(),
            })
        })
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Saved Inputs");
    }
    print_output(&rows, ctx.format)?;

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        for snapshot in &saved {
            if let Some(saved_at) = snapshot.saved_at {
                print_info(&format!(
                    "{} saved {}",
                    snapshot.form,
                    saved_at.format("%Y-%m-%d %H:%M UTC")
                ));
            }
        }
    }
    Ok(())
}

/// Clear saved inputs.
fn execute_clear(args: &ClearArgs, ctx: &Context) -> Result<()> {
    let removed = if args.all {
        ctx.forms.clear_all()?
    } else {
        let mut removed = 0;
        for form in selected_forms(args.form) {
            removed += ctx.forms.clear(form)?;
        }
        removed
    };

    if !ctx.quiet {
        let scope = args
            .form
            .map_or_else(|| "all forms".to_string(), |form| form.to_string());
        print_success(&format!("Cleared {} saved value(s) for {}", removed, scope));
    }
    Ok(())
}
