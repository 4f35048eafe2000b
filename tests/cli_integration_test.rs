//! Integration tests for the qametrics binary.

mod common;

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn qametrics() -> Command {
    let mut cmd = Command::cargo_bin("qametrics").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_simulate_json_report_and_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = common::write_dataset(temp_dir.path());
    let out = temp_dir.path().join("out");

    let output = qametrics()
        .current_dir(temp_dir.path())
        .args(["simulate", "--format", "json", "--output-dir"])
        .arg(&out)
        .arg(&dataset)
        .output()
        .unwrap();

    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("qametrics simulate failed");
    }

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["summary"]["last_update"], "2024-03-03");
    assert_eq!(json["exit_criteria"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["artifacts"].as_array().map(Vec::len), Some(5));

    assert!(out.join("dashboard_day_1.html").is_file());
    assert!(out.join("metrics_summary.csv").is_file());
}

#[test]
fn test_simulate_missing_dataset_fails() {
    let temp_dir = TempDir::new().unwrap();
    qametrics()
        .current_dir(temp_dir.path())
        .args(["simulate", "does-not-exist.csv"])
        .assert()
        .failure();
}

#[test]
fn test_trend_command() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = common::write_dataset(temp_dir.path());

    let output = qametrics()
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .args(["trend", "--metric", "open_defects", "--window", "3"])
        .arg(&dataset)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Open defects over the last 3 day(s): rising (+1.000)"));
}

#[test]
fn test_risk_matrix_command() {
    let temp_dir = TempDir::new().unwrap();
    let features = temp_dir.path().join("features.csv");
    fs::write(
        &features,
        indoc! {"
            feature,severity,occurrence,detection
            Payment simulator,8,6,7
            Cancellation,2,3,4
        "},
    )
    .unwrap();
    let out = temp_dir.path().join("rpn.csv");

    qametrics()
        .args(["risk-matrix", "-o"])
        .arg(&out)
        .arg(&features)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "feature,severity,occurrence,detection,rpn,risk_level,mitigation"
    );
    assert!(lines[1].starts_with("Payment simulator,8,6,7,336,Critical,"));
    assert!(lines[2].starts_with("Cancellation,2,3,4,24,Low,"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    qametrics()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join(".qametrics.toml").is_file());

    qametrics()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    qametrics()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
