//! Error types for fixture resolution.

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use thiserror::Error;

/// Errors raised while resolving fixtures into concrete test parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// No chain profile exists for the chain id.
    #[error("No chain profile for chain id {0}")]
    UnsupportedChain(u64),

    /// The chain profile has no sweep (reward) token.
    #[error("Chain {0} has no sweep token configured")]
    MissingSweepToken(NamedChain),

    /// A pool fixture name did not match any known pool.
    #[error("Unknown pool fixture: {0}")]
    UnknownPool(String),

    /// A swap route breaks its chaining invariants.
    #[error("Invalid swap route: {0}")]
    InvalidRoute(#[from] RouteError),

    /// A token amount could not be expressed in base units.
    #[error("Invalid token amount {amount} at {decimals} decimals: {reason}")]
    InvalidAmount {
        amount: String,
        decimals: u8,
        reason: &'static str,
    },
}

/// Ways a swap route can be malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The first hop does not start at the sweep token.
    #[error("route starts at {found}, expected sweep token {expected}")]
    WrongStart { expected: Address, found: Address },

    /// A hop does not start where the previous one ended.
    #[error("hop {index} starts at {found}, previous hop ended at {expected}")]
    Broken {
        index: usize,
        expected: Address,
        found: Address,
    },

    /// A hop swaps a token into itself.
    #[error("hop {index} swaps {token} into itself")]
    SelfSwap { index: usize, token: Address },
}

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;
