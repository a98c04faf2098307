//! Reference scenarios checked through the public API.

use approx::assert_relative_eq;
use kira_calc::prelude::*;
use kira_core::formatting::{format_money, format_percent};

#[test]
fn loan_of_100k_at_5_percent_over_10_years() {
    let loan = LoanInput::parse("100,000", "5", "10")
        .and_then(|input| input.compute())
        .unwrap();

    assert_eq!(format_money(loan.monthly_payment, "MYR"), "MYR 1,060.66");
    assert_eq!(format_money(loan.total_payment, "MYR"), "MYR 127,278.62");
    assert_eq!(format_money(loan.total_interest, "MYR"), "MYR 27,278.62");
    assert_eq!(format_percent(loan.annual_mortgage_constant_percent, 2), "12.73%");

    let schedule = generate_amortization_schedule(100_000.0, 5.0, 10.0).unwrap();
    assert_eq!(schedule.len(), 120);
    assert_relative_eq!(schedule.total_interest(), loan.total_interest, epsilon = 1e-6);
    assert_eq!(format_money(schedule.final_balance(), "MYR"), "MYR 0.00");
}

#[test]
fn comparing_two_offers() {
    let comparison = compare_loans(
        300_000.0,
        LoanTerms::new(4.5, 30.0),
        LoanTerms::new(4.0, 25.0),
    )
    .unwrap();

    assert!(comparison.monthly_payment_difference > 0.0);
    assert!(comparison.total_interest_difference < 0.0);
    assert_eq!(comparison.cheaper(), Some(Scenario::B));
}

#[test]
fn savings_compounded_monthly() {
    let result = CompoundInterestInput::parse("1,000", "100", "5", "12", "12")
        .and_then(|input| input.compute())
        .unwrap();

    assert_eq!(format_money(result.maturity_value, "MYR"), "MYR 2,284.16");
    assert_eq!(format_money(result.interest_earned, "MYR"), "MYR 84.16");
    assert_eq!(format_money(result.total_principal_contributed, "MYR"), "MYR 2,200.00");
}

#[test]
fn property_purchase_costs() {
    let result = compute_property_tax(400_000.0, 300_000.0).unwrap();

    assert_eq!(format_money(result.legal_fee, "MYR"), "MYR 5,000.00");
    assert_eq!(format_money(result.transfer_stamp_duty, "MYR"), "MYR 7,000.00");
    assert_eq!(format_money(result.loan_stamp_duty, "MYR"), "MYR 1,500.00");
    assert_eq!(format_money(result.total_cost, "MYR"), "MYR 13,500.00");
}

#[test]
fn rental_yields_without_financing() {
    let result = compute_roi(500_000.0, 2_000.0, 5_000.0, 0.0, 0.0).unwrap();

    assert_eq!(format_percent(result.gross_yield_percent, 2), "4.80%");
    assert_eq!(format_percent(result.net_yield_percent, 2), "3.80%");
    assert_eq!(format_percent(result.net_leveraged_yield_percent, 2), "3.80%");
    assert_relative_eq!(result.capital_cost, 500_000.0);
}

#[test]
fn fuel_economy_with_trip_cost() {
    let result = FuelEconomyInput::parse("450", "30").unwrap().compute().unwrap();
    let trip = result.trip_cost(2.05).unwrap();

    assert_relative_eq!(result.km_per_litre, 15.0);
    assert_eq!(format_money(trip.trip_cost, "MYR"), "MYR 61.50");
}

#[test]
fn invalid_inputs_name_their_field() {
    let cases: Vec<(CalcError, &str)> = vec![
        (compute_loan(100_000.0, 0.0, 10.0).unwrap_err(), "interestRate"),
        (compute_loan(100_000.0, 5.0, 0.0).unwrap_err(), "loanTerm"),
        (LoanInput::parse("", "5", "10").unwrap_err(), "loanAmount"),
        (compute_property_tax(0.0, 1.0).unwrap_err(), "propertyPrice"),
        (compute_roi(500_000.0, 2_000.0, 0.0, 500_000.0, 4.0).unwrap_err(), "loanAmount"),
        (compute_fuel_economy(100.0, 0.0).unwrap_err(), "fuelUsed"),
    ];

    for (err, field) in cases {
        assert_eq!(err.field(), field, "{}", err);
        assert!(err.to_string().contains(field));
    }
}
