//! Integration tests for the status command.

use predicates::prelude::*;
use strategy_harness_contracts::strategy::IVelodromeStrategy;
use strategy_harness_contracts::vault::IYearnVault;

use super::helpers::{harness_cmd_with_mock, strategy_record, word, SelectorNode};

const VAULT: &str = "0x00000000000000000000000000000000000000aa";
const STRATEGY: &str = "0x00000000000000000000000000000000000000bb";

/// A vault with an empty withdrawal queue.
fn node(debt_ratio: u64) -> SelectorNode {
    SelectorNode::default()
        .on::<IYearnVault::strategiesCall>(strategy_record(debt_ratio))
        .on::<IYearnVault::debtRatioCall>(word(debt_ratio))
        .on::<IYearnVault::withdrawalQueueCall>(word(0))
        .on::<IVelodromeStrategy::estimatedTotalAssetsCall>(word(60))
}

#[tokio::test]
async fn test_status_table_output() {
    let server = node(10_000).start().await;

    harness_cmd_with_mock(&server)
        .args(["status", "--vault", VAULT, "--strategy", STRATEGY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault Record"))
        .stdout(predicate::str::contains("Debt Ratio:      10000 bps"))
        .stdout(predicate::str::contains("(empty)"));
}

#[tokio::test]
async fn test_status_json_output() {
    let server = node(10_000).start().await;

    let output = harness_cmd_with_mock(&server)
        .args(["status", "--vault", VAULT, "--strategy", STRATEGY, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(status.get("params").is_some());
    assert!(status["queue"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_status_over_allocated_strategy_fails() {
    let server = node(20_000).start().await;

    harness_cmd_with_mock(&server)
        .args(["status", "--vault", VAULT, "--strategy", STRATEGY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strategy status check failed"))
        .stderr(predicate::str::contains("strategy debt ratio"));
}

#[test]
fn test_status_invalid_vault_address() {
    super::helpers::harness_cmd()
        .args([
            "status",
            "--vault",
            "not-an-address",
            "--strategy",
            STRATEGY,
            "--rpc-url",
            "http://127.0.0.1:1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid address for --vault"));
}
