//! Integration tests for the offline fixture listings.

use predicates::prelude::*;

use super::helpers::harness_cmd;

#[test]
fn test_profiles_table_output() {
    harness_cmd()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chain ID"))
        .stdout(predicate::str::contains("8453"))
        .stdout(predicate::str::contains("AERO"));
}

#[test]
fn test_profiles_json_output() {
    let output = harness_cmd()
        .args(["profiles", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = profiles.as_array().unwrap();
    assert_eq!(profiles.len(), 3);
    assert!(profiles.iter().all(|p| p.get("governance").is_some()));
    assert!(profiles.iter().any(|p| p["sweep_token"].is_null()));
}

#[test]
fn test_routes_on_base_flags_misrouted() {
    harness_cmd()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("primary/route0"))
        .stdout(predicate::str::contains("misrouted"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_routes_json_reports_problems() {
    let output = harness_cmd()
        .args(["routes", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let routes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let broken: Vec<&str> = routes
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| !r["problem"].is_null())
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(broken, vec!["misrouted"]);
}

#[test]
fn test_routes_on_chain_without_sweep_token() {
    harness_cmd()
        .args(["routes", "--chain", "ethereum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sweep token"));
}
