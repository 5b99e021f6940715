//! Fork harness for a clonable Velodrome/Aerodrome strategy on a Yearn V2 vault.
//!
//! The harness provisions a forked chain ([`Provisioner`]), drives harvests
//! ([`HarvestDriver`]), checks the vault's debt bookkeeping
//! ([`check_status`]) and runs the cloning and harvest-trigger scenarios.
//!
//! # Example
//!
//! ```no_run
//! use strategy_harness::{scenarios, Fork, HarnessConfig, Provisioner};
//!
//! #[tokio::main]
//! async fn main() -> strategy_harness::Result<()> {
//!     let fork = Fork::connect("http://localhost:8545")?;
//!     let config = HarnessConfig::new().with_env_artifacts();
//!
//!     let env = Provisioner::new(&fork, &config).provision().await?;
//!     let report = scenarios::run_triggers(&env).await?;
//!     assert!(report.trigger_checks.iter().all(|c| c.passed()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handles;
pub mod harvest;
pub mod provision;
pub mod revert;
pub mod scenarios;
pub mod status;

pub use config::{HarnessConfig, HarvestMode};
pub use error::{HarnessError, Result};
pub use handles::{BaseFeeOracleHandle, StrategyHandle, StrategyWiring, TokenHandle, VaultHandle};
pub use harvest::HarvestDriver;
pub use provision::{Accounts, Environment, Funding, Provisioner};
pub use revert::expect_revert;
pub use status::{check_status, StrategyStatus};

pub use strategy_harness_contracts::{ContractError, Fork, ImpersonatedSigner};
pub use strategy_harness_fixtures as fixtures;
