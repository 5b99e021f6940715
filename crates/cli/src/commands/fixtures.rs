//! Offline fixture listings.

use anyhow::Result;
use serde::Serialize;
use strategy_harness::fixtures::route::NAMED_ROUTES;
use strategy_harness::fixtures::{ChainProfile, RouteHop, SwapRoute, PROFILES};

use crate::cli::{OutputFormat, RoutesArgs};
use crate::output::{format_profiles_table, format_routes_table};

pub fn run_profiles(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(PROFILES)?),
        OutputFormat::Table => println!("{}", format_profiles_table(PROFILES)),
    }
    Ok(())
}

/// A named route together with its validity on the selected chain.
#[derive(Debug, Serialize)]
pub struct RouteListing {
    pub name: &'static str,
    pub hops: Vec<RouteHop>,
    /// `None` when the route is valid.
    pub problem: Option<String>,
}

pub fn run_routes(args: &RoutesArgs, format: OutputFormat) -> Result<()> {
    let profile = ChainProfile::for_chain_id(args.chain.0 as u64)?;
    let listings = route_listings(profile);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
        OutputFormat::Table => println!("{}", format_routes_table(&listings)),
    }
    Ok(())
}

fn route_listings(profile: &ChainProfile) -> Vec<RouteListing> {
    let sweep = profile.require_sweep_token();
    NAMED_ROUTES
        .iter()
        .map(|&(name, hops)| {
            let route = SwapRoute::from(hops);
            let problem = match &sweep {
                Ok(sweep) => route.validate(*sweep).err().map(|e| e.to_string()),
                Err(e) => Some(e.to_string()),
            };
            RouteListing {
                name,
                hops: hops.to_vec(),
                problem,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy_harness::fixtures::NamedChain;

    #[test]
    fn test_route_listings_on_base() {
        let profile = ChainProfile::for_chain(NamedChain::Base).unwrap();
        let listings = route_listings(profile);
        assert_eq!(listings.len(), NAMED_ROUTES.len());
        let invalid: Vec<_> = listings
            .iter()
            .filter(|l| l.problem.is_some())
            .map(|l| l.name)
            .collect();
        assert_eq!(invalid, vec!["misrouted"]);
    }

    #[test]
    fn test_route_listings_without_sweep_token() {
        let profile = ChainProfile::for_chain(NamedChain::Mainnet).unwrap();
        assert!(route_listings(profile).iter().all(|l| l.problem.is_some()));
    }
}
