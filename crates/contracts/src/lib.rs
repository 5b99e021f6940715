//! Contract bindings and fork plumbing for the strategy harness.
//!
//! This crate provides Solidity bindings for the vault, strategy, base-fee
//! oracle and ERC-20 contracts the harness drives, plus the pieces needed to
//! drive them on a forked node: [`Fork`] for clock and impersonation control,
//! [`ImpersonatedSigner`] for sending as an unlocked account, and
//! [`PreparedCall`] for sending or dry-running a typed call.
//!
//! # Example
//!
//! ```no_run
//! use strategy_harness_contracts::{strategy::IVelodromeStrategy, Fork};
//! use alloy::primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> strategy_harness_contracts::Result<()> {
//!     let fork = Fork::connect("http://localhost:8545")?;
//!
//!     let gov: Address = "0xbfAABa9F56A39B814281D68d2Ad949e88D06b02E".parse().unwrap();
//!     let strategy: Address = "0x0000000000000000000000000000000000000001".parse().unwrap();
//!     let gov = fork.impersonate(gov).await?;
//!     gov.prepare(strategy, IVelodromeStrategy::harvestCall {}).send().await?;
//!
//!     fork.sleep_and_mine(3600).await?;
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod erc20;
pub mod error;
pub mod fork;
pub mod oracle;
pub mod prepared_call;
pub mod provider;
pub mod signer;
pub mod strategy;
pub mod vault;

pub use artifact::ContractArtifact;
pub use error::{ContractError, Result};
pub use fork::{Fork, GAS_ALLOWANCE};
pub use prepared_call::PreparedCall;
pub use provider::{connect_http, ForkProvider};
pub use signer::ImpersonatedSigner;
