//! Smoke tests for the keypad CLI
//!
//! These tests drive the real binary and check stdout, stderr and exit codes.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keypad binary
fn keypad() -> Command {
    Command::cargo_bin("keypad").expect("keypad binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    keypad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYS"))
        .stdout(predicate::str::contains("--stdin"))
        .stdout(predicate::str::contains("--duration-ms"));
}

#[test]
fn test_help_describes_quiet() {
    keypad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiet mode (no log output)"));
}

#[test]
fn test_quiet_keeps_notices() {
    keypad()
        .args(["-q", "--color", "never", "1/0="])
        .assert()
        .success()
        .stdout("1÷0\n0\n")
        .stderr("! Invalid Expression: Infinity (3000ms)\n");
}

#[test]
fn test_no_keys_prints_zero() {
    keypad().assert().success().stdout("0\n");
}

// ============================================================================
// Key Sequence Tests
// ============================================================================

#[test]
fn test_single_argument_split() {
    keypad()
        .arg("12+3=")
        .assert()
        .success()
        .stdout("12+3\n15\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_display_glyphs() {
    keypad()
        .args(["--color", "never", "8/2*3-1"])
        .assert()
        .success()
        .stdout("8÷2×3\u{2212}1\n");
}

#[test]
fn test_named_keys() {
    keypad()
        .args(["9", "8", "Backspace"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_clear_key() {
    keypad().args(["5", "+", "c"]).assert().success().stdout("0\n");
}

#[test]
fn test_incomplete_is_silent() {
    keypad()
        .arg("3+=")
        .assert()
        .success()
        .stdout("3+\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_stdin_keys() {
    keypad()
        .arg("--stdin")
        .write_stdin("7\n-\n2\n\n=\n")
        .assert()
        .success()
        .stdout("7\u{2212}2\n5\n");
}

// ============================================================================
// Notice Tests
// ============================================================================

#[test]
fn test_division_by_zero_notice() {
    keypad()
        .args(["--color", "never", "1", "/", "0", "="])
        .assert()
        .success()
        .stdout("1÷0\n0\n")
        .stderr(predicate::str::contains(
            "! Invalid Expression: Infinity (3000ms)",
        ));
}

#[test]
fn test_duration_override() {
    keypad()
        .args(["--color", "never", "--duration-ms", "500", "(1="])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "! Invalid Expression: Unbalanced Parentheses (500ms)",
        ));
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("widget.json");
    fs::write(
        &path,
        r#"{"invalid_prefix": "Nope", "notification_duration_ms": 42}"#,
    )
    .unwrap();

    keypad()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .arg(")=")
        .assert()
        .success()
        .stderr(predicate::str::contains("! Nope: Unbalanced Parentheses (42ms)"));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output() {
    let output = keypad().args(["--json", "2*3="]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["expression"], "6");
    assert_eq!(json["summary"], "2*3");
    assert_eq!(json["notices"].as_array().unwrap().len(), 0);
}

#[test]
fn test_json_notices() {
    let output = keypad().args(["--json", "1/0="]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["expression"], "0");
    assert_eq!(json["notices"][0]["message"], "Invalid Expression: Infinity");
    assert_eq!(json["notices"][0]["duration_ms"], 3000);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_config_file() {
    keypad()
        .args(["--config", "/nonexistent/widget.json", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_malformed_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("widget.json");
    fs::write(&path, "{not json").unwrap();

    keypad()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration error"));
}

#[test]
fn test_zero_duration_rejected() {
    keypad()
        .args(["--duration-ms", "0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("notification_duration_ms"));
}

#[test]
fn test_empty_key_rejected() {
    keypad()
        .args(["1", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}
