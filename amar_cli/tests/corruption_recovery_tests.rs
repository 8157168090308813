//! Corruption recovery tests for the amar CLI.
//!
//! These tests verify the system can handle:
//! - Corrupted history files
//! - Corrupted theme files
//! - Empty and foreign-format stored values

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("amar"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_history_reads_as_empty() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("history.json"), "{ invalid json }}}}").unwrap();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No BMI calculations yet"));
}

#[test]
fn test_calc_recovers_corrupted_history() {
    let temp_dir = setup_test_dir();
    let history_path = temp_dir.path().join("history.json");
    fs::write(&history_path, "not json at all").unwrap();

    cli()
        .arg("calc")
        .arg("170")
        .arg("70")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    // The store was rewritten as a valid single-entry log
    let raw = fs::read_to_string(&history_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("history should be valid JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
}

#[test]
fn test_foreign_format_history_reads_as_empty() {
    let temp_dir = setup_test_dir();
    // Valid JSON, wrong shape
    fs::write(
        temp_dir.path().join("history.json"),
        r#"{"entries": "elsewhere"}"#,
    )
    .unwrap();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No BMI calculations yet"));
}

#[test]
fn test_truncated_history_reads_as_empty() {
    let temp_dir = setup_test_dir();
    // Simulates a write cut off mid-array
    fs::write(temp_dir.path().join("history.json"), r#"[{"bmi":22.0,"#).unwrap();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No BMI calculations yet"));
}

#[test]
fn test_empty_history_file_reads_as_empty() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("history.json"), "").unwrap();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No BMI calculations yet"));
}

#[test]
fn test_corrupted_theme_defaults_to_light() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("theme.json"), "definitely not a bool").unwrap();

    cli()
        .arg("theme")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_toggle_recovers_corrupted_theme() {
    let temp_dir = setup_test_dir();
    let theme_path = temp_dir.path().join("theme.json");
    fs::write(&theme_path, "{}{}{}").unwrap();

    // Corrupt state loads as the light default, so a toggle lands on dark
    cli()
        .arg("theme")
        .arg("--toggle")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    assert_eq!(fs::read_to_string(&theme_path).unwrap(), "true");
}

#[test]
fn test_corrupt_stores_do_not_block_calculation() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("history.json"), "garbage").unwrap();
    fs::write(temp_dir.path().join("theme.json"), "garbage").unwrap();

    cli()
        .arg("calc")
        .arg("165")
        .arg("60")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Normal weight"));
}
