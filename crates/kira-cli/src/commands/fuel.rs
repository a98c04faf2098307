//! Fuel command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use kira_calc::{FuelEconomyInput, FuelEconomyResult, TripCost};
use kira_core::formatting::format_number;
use kira_core::input::parse_amount;
use kira_storage::CalculatorForm;

use crate::commands::Context;
use crate::output::{print_report, KeyValue};

/// Arguments for the fuel command.
#[derive(Args, Debug)]
pub struct FuelArgs {
    /// Distance travelled in km
    #[arg(long)]
    pub distance: Option<String>,

    /// Fuel used in litres
    #[arg(long)]
    pub fuel_used: Option<String>,

    /// Fuel price per litre, to estimate the trip cost
    #[arg(long)]
    pub price: Option<String>,
}

/// JSON shape of the fuel report.
#[derive(Serialize)]
struct FuelReport {
    #[serde(flatten)]
    economy: FuelEconomyResult,
    trip: Option<TripCost>,
}

fn fuel_rows(ctx: &Context, report: &FuelReport) -> Vec<KeyValue> {
    let economy = &report.economy;
    let mut rows = vec![
        KeyValue::new("Distance", format!("{} km", format_number(economy.distance_km))),
        KeyValue::new(
            "Fuel Used",
            format!("{} L", format_number(economy.fuel_used_litres)),
        ),
        KeyValue::new(
            "Fuel Economy",
            format!("{} km/L", format_number(economy.km_per_litre)),
        ),
        KeyValue::new(
            "Consumption",
            format!("{} L/100km", format_number(economy.litres_per_100km)),
        ),
    ];
    if let Some(trip) = &report.trip {
        rows.push(KeyValue::new("Fuel Price", ctx.money(trip.price_per_litre)));
        rows.push(KeyValue::new("Trip Cost", ctx.money(trip.trip_cost)));
        rows.push(KeyValue::new("Cost per km", ctx.money(trip.cost_per_km)));
    }
    rows
}

/// Execute the fuel command.
pub fn execute(args: FuelArgs, ctx: &Context) -> Result<()> {
    let mut inputs = ctx.inputs(CalculatorForm::Fuel)?;
    let distance = inputs.require("distance", "--distance", args.distance)?;
    let fuel_used = inputs.require("fuelUsed", "--fuel-used", args.fuel_used)?;
    let price = inputs.optional("fuelPrice", args.price);

    let economy = FuelEconomyInput::parse(&distance, &fuel_used)?.compute()?;
    let trip = match price {
        Some(raw) => Some(economy.trip_cost(parse_amount(&raw, "fuelPrice")?)?),
        None => None,
    };
    inputs.remember(ctx)?;

    let report = FuelReport { economy, trip };
    print_report(
        "Fuel Economy",
        &fuel_rows(ctx, &report),
        &report,
        ctx.format,
        ctx.quiet,
    )
}
