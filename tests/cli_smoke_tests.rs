use std::path::Path;

use assert_cmd::Command;
use chrono::NaiveDate;
use penny_domain::Transaction;
use penny_storage_json::JsonExpenseFile;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::{tempdir, TempDir};

const BIN_NAME: &str = "pennykeeper_cli";

fn cli_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("PENNYKEEPER_HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd.arg("--no-color");
    cmd
}

fn expense(amount: f64, year: i32, month: u32, category: &str) -> Transaction {
    let at = NaiveDate::from_ymd_opt(year, month, 12)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    Transaction::new(amount, at).with_category(category)
}

fn seeded_history() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("expenses.json");
    JsonExpenseFile::new(&path)
        .save(&[
            expense(200.0, 2024, 9, "Food"),
            expense(100.0, 2024, 10, "Food"),
            expense(400.0, 2024, 11, "Travel"),
            expense(300.0, 2024, 12, "Food"),
        ])
        .expect("seed history");
    (dir, path)
}

#[test]
fn forecast_prints_prediction_and_trend() {
    let (dir, path) = seeded_history();

    cli_command(dir.path())
        .arg("forecast")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("$ 305.70"))
        .stdout(contains("Jan 2025"))
        .stdout(contains("Sep 2024").and(contains("Dec 2024")));
}

#[test]
fn forecast_json_output_is_machine_readable() {
    let (dir, path) = seeded_history();

    let output = cli_command(dir.path())
        .args(["forecast", "--json", "--months", "2", "--file"])
        .arg(&path)
        .output()
        .expect("run forecast");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let prediction = report["prediction"].as_f64().expect("prediction");
    assert!((prediction - 305.7).abs() < 1e-9);
    assert_eq!(report["months_observed"], 4);
    assert_eq!(report["trend"].as_array().expect("trend").len(), 2);
}

#[test]
fn forecast_with_single_month_is_zero() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("one.json");
    JsonExpenseFile::new(&path)
        .save(&[expense(80.0, 2024, 3, "Food")])
        .expect("seed history");

    cli_command(dir.path())
        .args(["forecast", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("$ 0.00"))
        .stdout(contains("At least two months"));
}

#[test]
fn summary_names_heaviest_category() {
    let (dir, path) = seeded_history();

    cli_command(dir.path())
        .args(["summary", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("(60%)"))
        .stdout(contains("Number of transactions: 4"));
}

#[test]
fn trend_respects_month_window() {
    let (dir, path) = seeded_history();

    cli_command(dir.path())
        .args(["trend", "--months", "1", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Dec 2024").and(contains("Nov 2024").not()));
}

#[test]
fn configured_alpha_is_used_when_flag_missing() {
    let (dir, path) = seeded_history();
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(
        config_dir.join("config.json"),
        r#"{"locale": "en-US", "currency": "USD", "forecast": {"smoothing_factor": 1.0}}"#,
    )
    .expect("write config");

    cli_command(dir.path())
        .args(["forecast", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("$ 300.00"));
}

#[test]
fn invalid_alpha_fails_with_error() {
    let (dir, path) = seeded_history();

    cli_command(dir.path())
        .args(["forecast", "--alpha", "1.5", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("smoothing_factor")));
}

#[test]
fn zero_month_window_fails_with_error() {
    let (dir, path) = seeded_history();

    for command in ["forecast", "trend"] {
        cli_command(dir.path())
            .args([command, "--months", "0", "--file"])
            .arg(&path)
            .assert()
            .failure()
            .stdout(contains("$").not())
            .stderr(contains("Error:").and(contains("trend_months")));
    }
}

#[test]
fn malformed_history_fails_with_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").expect("write");

    cli_command(dir.path())
        .args(["summary", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Serialization error"));
}

#[test]
fn version_ignores_malformed_config() {
    let dir = tempdir().expect("tempdir");
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(config_dir.join("config.json"), "{ not json").expect("write config");

    cli_command(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("PennyKeeper"));
}

#[test]
fn reading_commands_leave_config_dir_untouched() {
    let (dir, path) = seeded_history();

    cli_command(dir.path())
        .args(["forecast", "--file"])
        .arg(&path)
        .assert()
        .success();
    cli_command(dir.path()).arg("version").assert().success();

    assert!(!dir.path().join("config").exists());
}

#[test]
fn version_command_prints_build_info() {
    let dir = tempdir().expect("tempdir");

    cli_command(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("PennyKeeper"));
}
