//! Static fixtures and accounting predicates for the strategy harness.
//!
//! Nothing in this crate talks to a node. Chain profiles, pool and route
//! tables are `'static` data; invariants and trigger expectations are pure
//! functions over values read elsewhere.

pub mod amount;
pub mod chain;
mod error;
pub mod harvest;
pub mod invariants;
pub mod pool;
pub mod route;
pub mod tokens;
pub mod trigger;

pub use amount::{format_units, TokenAmount};
pub use chain::{ChainProfile, PROFILES};
pub use error::{FixtureError, Result, RouteError};
pub use harvest::{HarvestExtra, HarvestResult};
pub use invariants::{ProfitThresholds, StrategyParams, Violation, MAX_BPS};
pub use pool::{PoolFixture, PoolKind, ProfitToken, POOLS};
pub use route::{RouteHop, SwapRoute};
pub use trigger::{TriggerCheck, TriggerCondition};

pub use alloy_chains::NamedChain;
