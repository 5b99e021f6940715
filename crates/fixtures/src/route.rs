//! Reward-token swap routes.
//!
//! A strategy holds two routes, one per underlying token of its LP pair.
//! Each route starts at the sweep token and every hop picks up where the
//! previous one left off. An empty route means the sweep token already is
//! that side of the pair.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::tokens::{AERO, DOLA, FACTORY_V1, FACTORY_V2, PHAM, PWBLT, USDBC, USDC};

/// One swap through a single pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteHop {
    pub from: Address,
    pub to: Address,
    pub stable: bool,
    pub factory: Address,
}

impl RouteHop {
    pub const fn new(from: Address, to: Address, stable: bool, factory: Address) -> Self {
        Self {
            from,
            to,
            stable,
            factory,
        }
    }

    const fn volatile(from: Address, to: Address) -> Self {
        Self::new(from, to, false, FACTORY_V2)
    }
}

/// An ordered list of hops.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapRoute(Vec<RouteHop>);

impl SwapRoute {
    pub fn new(hops: Vec<RouteHop>) -> Self {
        Self(hops)
    }

    pub fn hops(&self) -> &[RouteHop] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Token the route ends at, if it has any hops.
    pub fn destination(&self) -> Option<Address> {
        self.0.last().map(|hop| hop.to)
    }

    /// Check the route against the chain's sweep token, reporting the first
    /// violation found.
    pub fn validate(&self, sweep_token: Address) -> Result<(), RouteError> {
        let Some(first) = self.0.first() else {
            return Ok(());
        };
        if first.from != sweep_token {
            return Err(RouteError::WrongStart {
                expected: sweep_token,
                found: first.from,
            });
        }

        let mut previous: Option<&RouteHop> = None;
        for (index, hop) in self.0.iter().enumerate() {
            if hop.from == hop.to {
                return Err(RouteError::SelfSwap {
                    index,
                    token: hop.from,
                });
            }
            if let Some(prev) = previous {
                if prev.to != hop.from {
                    return Err(RouteError::Broken {
                        index,
                        expected: prev.to,
                        found: hop.from,
                    });
                }
            }
            previous = Some(hop);
        }
        Ok(())
    }
}

impl From<&[RouteHop]> for SwapRoute {
    fn from(hops: &[RouteHop]) -> Self {
        Self(hops.to_vec())
    }
}

impl<'a> IntoIterator for &'a SwapRoute {
    type Item = &'a RouteHop;
    type IntoIter = std::slice::Iter<'a, RouteHop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// AERO -> USDC -> pwBLT -> pHAM
pub const PRIMARY_ROUTE0: &[RouteHop] = &[
    RouteHop::volatile(AERO, USDC),
    RouteHop::volatile(USDC, PWBLT),
    RouteHop::volatile(PWBLT, PHAM),
];

/// AERO -> USDC -> pwBLT
pub const PRIMARY_ROUTE1: &[RouteHop] = &[
    RouteHop::volatile(AERO, USDC),
    RouteHop::volatile(USDC, PWBLT),
];

/// AERO -> USDC -> DOLA, the last hop through a stable pool.
pub const STABLE_ROUTE0: &[RouteHop] = &[
    RouteHop::volatile(AERO, USDC),
    RouteHop::new(USDC, DOLA, true, FACTORY_V2),
];

pub const STABLE_ROUTE1: &[RouteHop] = &[RouteHop::volatile(AERO, USDC)];

pub const VOLATILE_ROUTE0: &[RouteHop] = &[RouteHop::volatile(AERO, USDC)];

pub const VOLATILE_ROUTE1: &[RouteHop] = &[];

/// Valid route that crosses a v1 stable pool.
pub const ALT_ROUTE: &[RouteHop] = &[
    RouteHop::volatile(AERO, USDC),
    RouteHop::new(USDC, USDBC, true, FACTORY_V1),
];

/// Route that does not start at the sweep token. Strategies must reject it.
pub const MISROUTED: &[RouteHop] = &[
    RouteHop::new(USDBC, USDC, true, FACTORY_V1),
    RouteHop::volatile(USDC, AERO),
];

/// Every named route table, for listing.
pub const NAMED_ROUTES: &[(&str, &[RouteHop])] = &[
    ("primary/route0", PRIMARY_ROUTE0),
    ("primary/route1", PRIMARY_ROUTE1),
    ("stable/route0", STABLE_ROUTE0),
    ("stable/route1", STABLE_ROUTE1),
    ("volatile/route0", VOLATILE_ROUTE0),
    ("volatile/route1", VOLATILE_ROUTE1),
    ("alt", ALT_ROUTE),
    ("misrouted", MISROUTED),
];
