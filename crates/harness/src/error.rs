//! Error types for the harness.

use alloy_primitives::{Address, U256};
use strategy_harness_contracts::ContractError;
use strategy_harness_fixtures::{FixtureError, TriggerCheck, Violation};
use thiserror::Error;

/// Errors that can occur while provisioning or running a scenario.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A fork or contract call failed, including unexpected reverts.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Fixture data could not be resolved.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// An accounting invariant did not hold.
    #[error("Invariant violated: {0}")]
    InvariantViolation(#[from] Violation),

    /// A funded account holds less than the scenario needs.
    #[error("{role} {account} holds {have} of token {token}, needs at least {need}")]
    InsufficientFunding {
        role: &'static str,
        account: Address,
        token: Address,
        have: U256,
        need: U256,
    },

    /// The fork runs a different chain than configured.
    #[error("Fork reports chain {actual}, configuration expects {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The configured vault accepts a different token than the pool under test.
    #[error("Vault {vault} accepts token {actual}, pool uses {expected}")]
    VaultTokenMismatch {
        vault: Address,
        expected: Address,
        actual: Address,
    },

    /// Deploying requires an artifact path that was not configured.
    #[error("No {0} artifact configured")]
    MissingArtifact(&'static str),

    /// The base-fee oracle still rejects the base fee after setup.
    #[error("Base fee not acceptable for strategy {0}")]
    BaseFeeNotAcceptable(Address),

    /// `harvestTrigger` disagreed with the expectation.
    #[error(
        "Harvest trigger mismatch ({}): expected {}, observed {}",
        .0.condition,
        .0.expected,
        .0.observed
    )]
    TriggerMismatch(TriggerCheck),

    /// A call that should have reverted went through.
    #[error("{signature} on {to} succeeded but should have reverted")]
    UnexpectedSuccess {
        to: Address,
        signature: &'static str,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
