//! End-to-end tests of the `kira` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Writes a config pointing the store into `dir`, with optional extra TOML.
fn write_config(dir: &Path, extra: &str) {
    let store = dir.join("inputs.redb");
    fs::write(
        dir.join("config.toml"),
        format!("store_path = '{}'\n{}", store.display(), extra),
    )
    .unwrap();
}

fn setup() -> TempDir {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "");
    dir
}

fn kira(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kira").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn loan_prints_monthly_payment() {
    let dir = setup();
    kira(&dir)
        .args(["loan", "--amount", "100,000", "--rate", "5", "--term", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 1,060.66"))
        .stdout(predicate::str::contains("MYR 27,278.62"));
}

#[test]
fn omitted_arguments_are_restored() {
    let dir = setup();
    kira(&dir)
        .args(["loan", "--amount", "100,000", "--rate", "5", "--term", "10"])
        .assert()
        .success();

    kira(&dir)
        .arg("loan")
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 1,060.66"));

    // Only the rate changes; amount and term come from the saved form
    kira(&dir)
        .args(["loan", "--rate", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 1,012.45"));
}

#[test]
fn no_save_leaves_store_untouched() {
    let dir = setup();
    kira(&dir)
        .args(["--no-save", "fuel", "--distance", "450", "--fuel-used", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15.00 km/L"));

    kira(&dir)
        .arg("fuel")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument: --distance"));
}

#[test]
fn invalid_input_fails_with_field_name() {
    let dir = setup();
    kira(&dir)
        .args(["loan", "--amount", "100,000", "--rate", "0", "--term", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interestRate"));

    kira(&dir)
        .args(["roi", "--price", "abc", "--rental", "2000"])
        .args(["--expenses", "5000", "--loan", "0", "--rate", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("propertyPrice"));
}

#[test]
fn failed_runs_are_not_saved() {
    let dir = setup();
    kira(&dir)
        .args(["loan", "--amount", "100,000", "--rate", "0", "--term", "10"])
        .assert()
        .failure();

    kira(&dir)
        .args(["inputs", "show", "loan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100,000").not());
}

#[test]
fn json_output_has_raw_values() {
    let dir = setup();
    let output = kira(&dir)
        .args(["--format", "json", "compound", "--principal", "1,000"])
        .args(["--deposit", "100", "--rate", "5", "--months", "12", "--frequency", "monthly"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let maturity = json["maturity_value"].as_f64().unwrap();
    assert!((maturity - 2_284.16).abs() < 0.005);
    assert_eq!(json["frequency"], "monthly");
}

#[test]
fn property_tax_uses_configured_schedule() {
    let dir = setup();
    kira(&dir)
        .args(["property-tax", "--price", "400,000", "--loan", "300,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYR 13,500.00"));

    write_config(
        dir.path(),
        "currency = 'RM'\n\
         [property_tax]\n\
         loan_duty_percent = 0.0\n\
         legal_fee = [{ rate_percent = 1.0 }]\n\
         transfer_duty = [{ rate_percent = 2.0 }]\n",
    );
    kira(&dir)
        .arg("property-tax")
        .assert()
        .success()
        .stdout(predicate::str::contains("RM 12,000.00"));
}

#[test]
fn schedule_csv_has_one_row_per_month() {
    let dir = setup();
    let output = kira(&dir)
        .args(["--format", "csv", "schedule", "--amount", "12,000", "--rate", "6", "--term", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("month,payment,interest_portion"));
    assert!(lines[12].starts_with("12,"));
    assert!(lines[12].ends_with(",0.0"));
}

#[test]
fn compare_names_cheaper_offer() {
    let dir = setup();
    kira(&dir)
        .args(["compare", "--amount", "300,000", "--rate1", "4.5", "--term1", "30"])
        .args(["--rate2", "4", "--term2", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Offer B"));
}

#[test]
fn inputs_show_and_clear() {
    let dir = setup();
    kira(&dir)
        .args(["roi", "--price", "500,000", "--rental", "2,000"])
        .args(["--expenses", "5,000", "--loan", "0", "--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.80%"));

    kira(&dir)
        .args(["inputs", "show", "roi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500,000"))
        .stdout(predicate::str::contains("monthlyRental"));

    kira(&dir)
        .args(["inputs", "clear", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 6 saved value(s)"));

    kira(&dir)
        .arg("roi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--price"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("kira")
        .unwrap()
        .args(["--config"])
        .arg(dir.path().join("absent.toml"))
        .args(["fuel", "--distance", "1", "--fuel-used", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
