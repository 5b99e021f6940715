//! Command implementations.

mod fixtures;
mod scenarios;
mod status;

use alloy_primitives::Address;
use anyhow::{Context, Result};

pub use fixtures::{run_profiles, run_routes, RouteListing};
pub use scenarios::{run_cloning, run_triggers};
pub use status::run_status;

fn parse_address(flag: &str, value: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("invalid address for --{flag}: {value}"))
}
