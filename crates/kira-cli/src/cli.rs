//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{
    CompareArgs, CompoundArgs, FuelArgs, InputsArgs, LoanArgs, PropertyTaxArgs, RoiArgs,
    ScheduleArgs,
};

/// Kira - Loan, savings, property, and fuel calculators
///
/// Every numeric argument is taken as typed (thousands separators allowed).
/// Arguments left out are filled from the values saved by the previous run
/// of the same calculator.
#[derive(Parser)]
#[command(name = "kira")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from configuration, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(long, env = "KIRA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Do not save the inputs of this run
    #[arg(long, global = true)]
    pub no_save: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Monthly payment, totals, and mortgage constant of a loan
    Loan(LoanArgs),

    /// Month-by-month amortization schedule of a loan
    Schedule(ScheduleArgs),

    /// Compare two rate/term offers for the same loan amount
    Compare(CompareArgs),

    /// Compound interest on a deposit with monthly contributions
    Compound(CompoundArgs),

    /// Legal fee and stamp duties of a property purchase
    PropertyTax(PropertyTaxArgs),

    /// Gross, net, and leveraged rental yields
    Roi(RoiArgs),

    /// Fuel economy and trip cost
    Fuel(FuelArgs),

    /// Show or clear saved inputs
    Inputs(InputsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kira", "loan", "--amount", "100,000", "--no-save", "-vv", "--format", "json",
        ])
        .unwrap();

        assert!(cli.no_save);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Loan(_)));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["kira", "-q", "-v", "fuel"]).is_err());
    }
}
