//! Smoke tests for the keypad-calc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keypad-calc binary with a clean environment
fn keypad_calc() -> Command {
    let mut cmd = Command::cargo_bin("keypad-calc").expect("keypad-calc binary should exist");
    cmd.env_remove("KEYPAD_CALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    keypad_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_no_args_fails() {
    keypad_calc().assert().failure();
}

// ============================================================================
// press
// ============================================================================

#[test]
fn test_press_addition() {
    keypad_calc()
        .args(["press", "2", "+", "3", "="])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_press_division_by_zero() {
    keypad_calc()
        .args(["press", "3/0="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_press_leading_minus() {
    keypad_calc()
        .args(["press", "-4*2="])
        .assert()
        .success()
        .stdout("-8\n");
}

#[test]
fn test_press_error_then_recovery() {
    keypad_calc()
        .args(["press", "*=9"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_press_trace() {
    keypad_calc()
        .args(["press", "--trace", "C7="])
        .assert()
        .success()
        .stdout("C -> 0\n7 -> 7\n= -> 7\n");
}

#[test]
fn test_press_json() {
    let output = keypad_calc()
        .args(["press", "--json", "(1+2="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "Error");
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
    assert_eq!(json["steps"][4]["state"], "error");
}

#[test]
fn test_press_requires_keys() {
    keypad_calc().arg("press").assert().failure();
}

#[test]
fn test_reject_non_finite_flag() {
    keypad_calc()
        .args(["--reject-non-finite", "press", "3/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_precedence() {
    keypad_calc()
        .args(["eval", "2+3*4"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_eval_error_is_success_by_default() {
    keypad_calc()
        .args(["eval", "(1+2"])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_eval_strict_fails() {
    keypad_calc()
        .args(["eval", "--strict", "(1+2"])
        .assert()
        .failure()
        .stdout("Error\n")
        .stderr(predicate::str::contains("Evaluation failed"));
}

// ============================================================================
// keypad / config
// ============================================================================

#[test]
fn test_keypad_layout() {
    keypad_calc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("| [ 7 ] [ 8 ] [ 9 ] [ / ] |"))
        .stdout(predicate::str::contains("| [ C ] [ 0 ] [ = ] [ + ] |"));
}

#[test]
fn test_config_defaults() {
    keypad_calc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("non_finite: pass-through"))
        .stdout(predicate::str::contains("max_depth: 256"));
}

#[test]
fn test_config_file_is_applied() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("keypad.yaml");
    fs::write(&path, "engine:\n  non_finite: reject\n").unwrap();

    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["press", "0/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("keypad.yaml");
    fs::write(&path, "engine:\n  max_depth: 2\n").unwrap();

    keypad_calc()
        .env("KEYPAD_CALC_CONFIG", &path)
        .args(["eval", "((((1))))"])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_missing_config_file_fails() {
    keypad_calc()
        .args(["--config", "/nonexistent/keypad.yaml", "keypad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    keypad_calc()
        .args(["-vv", "press", "1+1="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("key pressed"));
}

#[test]
fn test_json_logs() {
    keypad_calc()
        .args(["-vv", "--log-format", "json", "eval", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}
