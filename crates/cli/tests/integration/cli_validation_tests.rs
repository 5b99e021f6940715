//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::harness_cmd;

#[test]
fn test_help_output() {
    harness_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("harness"))
        .stdout(predicate::str::contains("profiles"))
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("cloning"))
        .stdout(predicate::str::contains("triggers"));
}

#[test]
fn test_scenario_help_lists_overrides() {
    harness_cmd()
        .args(["cloning", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pool"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_invalid_command() {
    harness_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_status_missing_addresses() {
    harness_cmd()
        .args(["status", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_scenario_requires_rpc_url() {
    harness_cmd()
        .arg("triggers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_invalid_pool() {
    harness_cmd()
        .args(["cloning", "--pool", "curve", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("curve"));
}

#[test]
fn test_invalid_mode() {
    harness_cmd()
        .args(["triggers", "--mode", "cowswap", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_chain() {
    harness_cmd()
        .args(["routes", "--chain", "polygon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chain"));
}

#[test]
fn test_invalid_format() {
    harness_cmd()
        .args(["profiles", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
