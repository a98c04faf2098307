//! Fuel economy and trip cost.

use kira_core::input::parse_amount;
use kira_core::validation::{ensure_finite, ensure_positive};
use kira_core::CalcResult;
use serde::{Deserialize, Serialize};

/// Raw fuel economy inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEconomyInput {
    /// Distance travelled in kilometres
    pub distance_km: f64,
    /// Fuel used in litres
    pub fuel_used_litres: f64,
}

impl FuelEconomyInput {
    /// Parses fuel inputs from raw form fields.
    pub fn parse(distance: &str, fuel_used: &str) -> CalcResult<Self> {
        Ok(Self {
            distance_km: parse_amount(distance, "distance")?,
            fuel_used_litres: parse_amount(fuel_used, "fuelUsed")?,
        })
    }

    /// Computes fuel economy for these inputs.
    pub fn compute(&self) -> CalcResult<FuelEconomyResult> {
        compute_fuel_economy(self.distance_km, self.fuel_used_litres)
    }
}

/// Fuel consumption for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEconomyResult {
    /// Distance travelled in kilometres
    pub distance_km: f64,
    /// Fuel used in litres
    pub fuel_used_litres: f64,
    /// Kilometres per litre
    pub km_per_litre: f64,
    /// Litres per 100 kilometres
    pub litres_per_100km: f64,
}

impl FuelEconomyResult {
    /// Prices the trip at `price_per_litre`.
    pub fn trip_cost(&self, price_per_litre: f64) -> CalcResult<TripCost> {
        let price = ensure_positive(price_per_litre, "fuelPrice")?;
        let trip_cost = ensure_finite(self.fuel_used_litres * price, "tripCost")?;
        let cost_per_km = ensure_finite(trip_cost / self.distance_km, "costPerKm")?;

        Ok(TripCost {
            price_per_litre: price,
            trip_cost,
            cost_per_km,
        })
    }
}

/// Cost of a trip at a given fuel price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripCost {
    /// Fuel price per litre
    pub price_per_litre: f64,
    /// Fuel used × price
    pub trip_cost: f64,
    /// Trip cost / distance
    pub cost_per_km: f64,
}

/// Calculate fuel economy from distance and fuel used.
pub fn compute_fuel_economy(
    distance_km: f64,
    fuel_used_litres: f64,
) -> CalcResult<FuelEconomyResult> {
    let distance = ensure_positive(distance_km, "distance")?;
    let fuel = ensure_positive(fuel_used_litres, "fuelUsed")?;

    Ok(FuelEconomyResult {
        distance_km: distance,
        fuel_used_litres: fuel,
        km_per_litre: ensure_finite(distance / fuel, "kmPerLitre")?,
        litres_per_100km: ensure_finite(fuel / distance * 100.0, "litresPer100Km")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fuel_economy() {
        let result = compute_fuel_economy(450.0, 30.0).unwrap();
        assert_relative_eq!(result.km_per_litre, 15.0);
        assert_relative_eq!(
            result.litres_per_100km,
            6.666_666_666_666_667,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_trip_cost() {
        let result = compute_fuel_economy(450.0, 30.0).unwrap();
        let cost = result.trip_cost(2.05).unwrap();

        assert_relative_eq!(cost.trip_cost, 61.5, epsilon = 1e-9);
        assert_relative_eq!(cost.cost_per_km, 61.5 / 450.0, epsilon = 1e-12);
        assert_eq!(result.trip_cost(0.0).unwrap_err().field(), "fuelPrice");
    }

    #[test]
    fn test_trip_cost_overflow_is_rejected() {
        let short_trip = compute_fuel_economy(1e-3, 1.0).unwrap();
        assert_eq!(short_trip.trip_cost(1e307).unwrap_err().field(), "costPerKm");

        let long_trip = compute_fuel_economy(1.0, 2.0).unwrap();
        assert_eq!(long_trip.trip_cost(f64::MAX).unwrap_err().field(), "tripCost");
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert_eq!(compute_fuel_economy(0.0, 30.0).unwrap_err().field(), "distance");
        assert_eq!(compute_fuel_economy(450.0, 0.0).unwrap_err().field(), "fuelUsed");
        assert!(compute_fuel_economy(-450.0, 30.0).is_err());
        assert!(compute_fuel_economy(450.0, f64::INFINITY).is_err());
        assert!(FuelEconomyInput::parse("far", "30").is_err());
    }

    #[test]
    fn test_parse_input() {
        let input = FuelEconomyInput::parse("1,200", "80").unwrap();
        assert_relative_eq!(input.compute().unwrap().km_per_litre, 15.0);
    }
}
