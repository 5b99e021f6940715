//! LP pools under test and the accounts that fund them.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::amount::TokenAmount;
use crate::error::FixtureError;
use crate::route::{
    RouteHop, SwapRoute, PRIMARY_ROUTE0, PRIMARY_ROUTE1, STABLE_ROUTE0, STABLE_ROUTE1,
    VOLATILE_ROUTE0, VOLATILE_ROUTE1,
};

/// Which token the profit whale donates when simulating trade proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitToken {
    /// The chain's sweep (reward) token.
    Sweep,
    /// The pool's own LP token.
    Pool,
}

/// One LP token with its gauge, funded accounts and reward routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolFixture {
    pub name: &'static str,
    pub chain: NamedChain,
    /// LP token the vault accepts.
    pub token: Address,
    pub gauge: Address,
    /// Holder of `token` that makes deposits.
    pub whale: Address,
    pub deposit: TokenAmount,
    pub profit_whale: Address,
    pub profit_token: ProfitToken,
    pub profit_amount: TokenAmount,
    pub route0: &'static [RouteHop],
    pub route1: &'static [RouteHop],
    /// Management re-sends the routes with fee-on-transfer swaps after
    /// the strategy is attached.
    pub resets_routes: bool,
}

impl PoolFixture {
    pub fn route0(&self) -> SwapRoute {
        SwapRoute::from(self.route0)
    }

    pub fn route1(&self) -> SwapRoute {
        SwapRoute::from(self.route1)
    }
}

/// pwBLT/pHAM volatile pool.
pub const PRIMARY: PoolFixture = PoolFixture {
    name: "primary",
    chain: NamedChain::Base,
    token: address!("03FF264046b085450649A993Cdd65dCDD01A893e"),
    gauge: address!("19b05F319aC12296CB073218E912D0816030548F"),
    whale: address!("a5d981BC0Bc57500ffEDb2674c597F14a3Cb68c1"),
    deposit: TokenAmount::units(60, 0),
    profit_whale: address!("eBf418Fe2512e7E6bd9b87a8F0f294aCDC67e6B4"),
    profit_token: ProfitToken::Sweep,
    // 11 AERO
    profit_amount: TokenAmount::units(11, 0),
    route0: PRIMARY_ROUTE0,
    route1: PRIMARY_ROUTE1,
    resets_routes: true,
};

/// USDC/DOLA stable pool.
pub const STABLE: PoolFixture = PoolFixture {
    name: "stable",
    chain: NamedChain::Base,
    token: address!("f213F2D02837012dC0236cC105061e121bB03e37"),
    gauge: address!("CCff5627cd544b4cBb7d048139C1A6b6Bde67885"),
    whale: address!("33bcc72aa126a3258178822d2B8019AaCc966c93"),
    deposit: TokenAmount::units(1, 4),
    profit_whale: address!("71AcF8CBf8C843a2dc88a6f3Ec6F93bbFeF3AD08"),
    profit_token: ProfitToken::Pool,
    profit_amount: TokenAmount::units(5, 7),
    route0: STABLE_ROUTE0,
    route1: STABLE_ROUTE1,
    resets_routes: false,
};

/// USDC/AERO volatile pool.
pub const VOLATILE: PoolFixture = PoolFixture {
    name: "volatile",
    chain: NamedChain::Base,
    token: address!("6cDcb1C4A4D1C3C6d054b27AC5B77e89eAFb971d"),
    gauge: address!("4F09bAb2f0E15e2A078A227FE1537665F55b8360"),
    whale: address!("c1342eE2B9d9E8f1B7A612131b69cf03261957E0"),
    deposit: TokenAmount::units(1, 5),
    profit_whale: address!("2ECd81E43C1F66185446F4af7DfEAa6AAE249f55"),
    profit_token: ProfitToken::Pool,
    profit_amount: TokenAmount::units(5, 8),
    route0: VOLATILE_ROUTE0,
    route1: VOLATILE_ROUTE1,
    resets_routes: false,
};

pub const POOLS: &[PoolFixture] = &[PRIMARY, STABLE, VOLATILE];

/// Selects one of the pool fixtures by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolKind {
    #[default]
    Primary,
    Stable,
    Volatile,
}

impl PoolKind {
    pub fn fixture(self) -> &'static PoolFixture {
        match self {
            Self::Primary => &PRIMARY,
            Self::Stable => &STABLE,
            Self::Volatile => &VOLATILE,
        }
    }
}

impl std::str::FromStr for PoolKind {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "stable" => Ok(Self::Stable),
            "volatile" => Ok(Self::Volatile),
            _ => Err(FixtureError::UnknownPool(s.to_string())),
        }
    }
}
