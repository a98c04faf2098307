//! Kira CLI - Command-line interface for the finance calculators.
//!
//! # Usage
//!
//! ```bash
//! # Monthly payment of a loan, with its schedule
//! kira loan --amount 100,000 --rate 5 --term 10 --schedule
//!
//! # Re-run with a different rate; amount and term come from the last run
//! kira loan --rate 4.5
//!
//! # Savings with monthly deposits
//! kira compound --principal 1,000 --deposit 100 --rate 5 --months 12 --frequency monthly
//!
//! # Purchase costs as JSON
//! kira --format json property-tax --price 400,000 --loan 300,000
//!
//! # Forget everything
//! kira inputs clear --all
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kira_storage::{FormStore, RedbStore};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::KiraConfig;

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = KiraConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);

    // Open saved inputs
    let store_path = config.store_path()?;
    let forms = FormStore::new(RedbStore::open(&store_path)?);
    debug!("saved inputs at {}", store_path.display());

    let ctx = Context {
        config,
        format,
        save: !cli.no_save,
        quiet: cli.quiet,
        forms,
    };

    // Execute command
    match cli.command {
        Commands::Loan(args) => commands::loan::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Compare(args) => commands::compare::execute(args, &ctx)?,
        Commands::Compound(args) => commands::compound::execute(args, &ctx)?,
        Commands::PropertyTax(args) => commands::property_tax::execute(args, &ctx)?,
        Commands::Roi(args) => commands::roi::execute(args, &ctx)?,
        Commands::Fuel(args) => commands::fuel::execute(args, &ctx)?,
        Commands::Inputs(args) => commands::inputs::execute(args, &ctx)?,
    }

    Ok(())
}
