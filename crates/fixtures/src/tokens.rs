//! Base token and pool-factory addresses used by the route tables.

use alloy_primitives::{address, Address};

pub const AERO: Address = address!("940181a94A35A4569E4529A3CDfB74e38FD98631");
pub const USDC: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
/// Bridged USDC.
pub const USDBC: Address = address!("d9aAEc86B65D86f6A7B5B1b0c42FFA531710b6CA");
pub const PWBLT: Address = address!("3Dd79d6BD927615787Cc95F2c7A77C9aC1AF26F4");
pub const PHAM: Address = address!("2C8D2FC58B80aCb3b307C165af8F3eE296e6A271");
pub const DOLA: Address = address!("4621b7A9c75199271F773Ebd9A499dbd165c3191");

/// Aerodrome v1 pool factory.
pub const FACTORY_V1: Address = address!("25CbdDb98b35ab1FF77413456B31EC81A6B6B746");
/// Aerodrome v2 pool factory.
pub const FACTORY_V2: Address = address!("420DD381b31aEf6683db6B902084cB0FFECe40Da");
