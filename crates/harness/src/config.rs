//! Harness configuration.
//!
//! Defaults reproduce the Base pwBLT/pHAM setup. A config can be built in
//! code with the `with_*` methods or read from a JSON file, where every
//! field is optional.

use std::path::{Path, PathBuf};

use alloy_chains::NamedChain;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use strategy_harness_fixtures::PoolKind;

use crate::error::{HarnessError, Result};

/// Blocks mined for an external settlement when no target is given.
pub const DEFAULT_SETTLEMENT_TARGET: u64 = 9;

/// Default wait between harvests (12 hours).
pub const DEFAULT_SLEEP_TIME_SECS: u64 = 12 * 60 * 60;

/// Default wei tolerance for "about the same" balance checks.
pub const DEFAULT_TOLERANCE_WEI: u64 = 10;

/// Environment variable naming the vault artifact.
pub const VAULT_ARTIFACT_ENV: &str = "VAULT_ARTIFACT";

/// Environment variable naming the strategy artifact.
pub const STRATEGY_ARTIFACT_ENV: &str = "STRATEGY_ARTIFACT";

/// How harvest proceeds reach the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HarvestMode {
    /// The strategy swaps rewards itself inside `harvest()`.
    #[default]
    Direct,
    /// A trade facilitator delivers proceeds before the report; simulated by
    /// a donation from the profit whale.
    #[serde(rename = "yswaps")]
    YSwaps,
    /// Donation plus `target` blocks mined to let an external settlement land.
    ExternalSettlement {
        #[serde(default = "default_target")]
        target: u64,
    },
}

fn default_target() -> u64 {
    DEFAULT_SETTLEMENT_TARGET
}

impl HarvestMode {
    /// Whether proceeds are donated before reporting.
    pub fn donates(&self) -> bool {
        !matches!(self, Self::Direct)
    }
}

impl std::fmt::Display for HarvestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::YSwaps => f.write_str("yswaps"),
            Self::ExternalSettlement { target } => write!(f, "external settlement ({target} blocks)"),
        }
    }
}

/// Configuration for one harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Chain the fork must be running.
    pub chain: NamedChain,
    /// Pool fixture under test.
    pub pool: PoolKind,
    /// Existing vault to attach to. A fresh vault is deployed when unset.
    pub vault_address: Option<Address>,
    pub vault_artifact: Option<PathBuf>,
    pub strategy_artifact: Option<PathBuf>,
    pub harvest_mode: HarvestMode,
    pub is_clonable: bool,
    /// The strategy is not expected to earn anything.
    pub no_profit: bool,
    /// Conversions may lose a few wei. Follows `no_profit` when unset.
    pub is_slippery: Option<bool>,
    pub sleep_time_secs: u64,
    pub tolerance_wei: U256,
    /// Send calls that must revert. Disable on forks that cannot report reverts.
    pub expect_reverts: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            chain: NamedChain::Base,
            pool: PoolKind::Primary,
            vault_address: None,
            vault_artifact: None,
            strategy_artifact: None,
            harvest_mode: HarvestMode::Direct,
            is_clonable: true,
            no_profit: false,
            is_slippery: None,
            sleep_time_secs: DEFAULT_SLEEP_TIME_SECS,
            tolerance_wei: U256::from(DEFAULT_TOLERANCE_WEI),
            expect_reverts: true,
        }
    }
}

impl HarnessConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| HarnessError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarnessError::Config(e.to_string()))
    }

    /// Fill unset artifact paths from `VAULT_ARTIFACT` and `STRATEGY_ARTIFACT`.
    pub fn with_env_artifacts(mut self) -> Self {
        if self.vault_artifact.is_none() {
            self.vault_artifact = std::env::var_os(VAULT_ARTIFACT_ENV).map(PathBuf::from);
        }
        if self.strategy_artifact.is_none() {
            self.strategy_artifact = std::env::var_os(STRATEGY_ARTIFACT_ENV).map(PathBuf::from);
        }
        self
    }

    pub fn with_chain(mut self, chain: NamedChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_pool(mut self, pool: PoolKind) -> Self {
        self.pool = pool;
        self
    }

    /// Attach to an existing vault instead of deploying one.
    pub fn with_vault_address(mut self, vault: Address) -> Self {
        self.vault_address = Some(vault);
        self
    }

    pub fn with_vault_artifact(mut self, path: impl Into<PathBuf>) -> Self {
        self.vault_artifact = Some(path.into());
        self
    }

    pub fn with_strategy_artifact(mut self, path: impl Into<PathBuf>) -> Self {
        self.strategy_artifact = Some(path.into());
        self
    }

    pub fn with_harvest_mode(mut self, mode: HarvestMode) -> Self {
        self.harvest_mode = mode;
        self
    }

    pub fn with_clonable(mut self, clonable: bool) -> Self {
        self.is_clonable = clonable;
        self
    }

    pub fn with_no_profit(mut self, no_profit: bool) -> Self {
        self.no_profit = no_profit;
        self
    }

    pub fn with_slippery(mut self, slippery: bool) -> Self {
        self.is_slippery = Some(slippery);
        self
    }

    pub fn with_sleep_time(mut self, secs: u64) -> Self {
        self.sleep_time_secs = secs;
        self
    }

    pub fn with_tolerance(mut self, wei: U256) -> Self {
        self.tolerance_wei = wei;
        self
    }

    pub fn with_expect_reverts(mut self, expect: bool) -> Self {
        self.expect_reverts = expect;
        self
    }

    pub fn is_slippery(&self) -> bool {
        self.is_slippery.unwrap_or(self.no_profit)
    }

    /// Allowed shortfall when a depositor should get back what they put in.
    pub fn depositor_tolerance(&self) -> U256 {
        if self.no_profit || self.is_slippery() {
            self.tolerance_wei
        } else {
            U256::ZERO
        }
    }
}
