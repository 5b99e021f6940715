//! Table formatting for fixture listings.

use alloy_primitives::Address;
use strategy_harness::fixtures::tokens::{AERO, DOLA, FACTORY_V1, FACTORY_V2, PHAM, PWBLT, USDBC, USDC};
use strategy_harness::fixtures::{ChainProfile, RouteHop};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::commands::RouteListing;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Chain ID")]
    chain_id: u64,
    #[tabled(rename = "Governance")]
    governance: String,
    #[tabled(rename = "Management")]
    management: String,
    #[tabled(rename = "Sweep Token")]
    sweep_token: String,
    #[tabled(rename = "Base Fee Oracle")]
    base_fee_oracle: String,
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Route")]
    name: String,
    #[tabled(rename = "Hops")]
    hops: usize,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub(crate) fn truncate_address(addr: &Address) -> String {
    let addr = addr.to_string();
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

/// Symbol for the Base tokens the route tables use.
pub(crate) fn token_label(addr: &Address) -> String {
    let label = match *addr {
        a if a == AERO => "AERO",
        a if a == USDC => "USDC",
        a if a == USDBC => "USDbC",
        a if a == PWBLT => "pwBLT",
        a if a == PHAM => "PHAM",
        a if a == DOLA => "DOLA",
        _ => return truncate_address(addr),
    };
    label.to_string()
}

fn hop_label(hop: &RouteHop) -> String {
    let kind = if hop.stable { "s" } else { "v" };
    let factory = match hop.factory {
        f if f == FACTORY_V1 => "",
        f if f == FACTORY_V2 => "2",
        _ => "?",
    };
    format!("-{kind}{factory}-> {}", token_label(&hop.to))
}

fn route_path(hops: &[RouteHop]) -> String {
    match hops.first() {
        Some(first) => {
            let mut path = token_label(&first.from);
            for hop in hops {
                path.push(' ');
                path.push_str(&hop_label(hop));
            }
            path
        }
        None => "-".to_string(),
    }
}

pub fn format_profiles_table(profiles: &[ChainProfile]) -> String {
    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|p| ProfileRow {
            chain: p.chain.to_string(),
            chain_id: p.chain_id(),
            governance: truncate_address(&p.governance),
            management: truncate_address(&p.management),
            sweep_token: p
                .sweep_token
                .as_ref()
                .map(token_label)
                .unwrap_or_else(|| "-".to_string()),
            base_fee_oracle: truncate_address(&p.base_fee_oracle),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string()
}

pub fn format_routes_table(listings: &[RouteListing]) -> String {
    let rows: Vec<RouteRow> = listings
        .iter()
        .map(|l| RouteRow {
            name: l.name.to_string(),
            hops: l.hops.len(),
            path: route_path(&l.hops),
            status: l.problem.clone().unwrap_or_else(|| "ok".to_string()),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy_harness::fixtures::route::PRIMARY_ROUTE1;

    #[test]
    fn test_token_label() {
        assert_eq!(token_label(&AERO), "AERO");
        assert_eq!(token_label(&Address::ZERO), "0x0000...0000");
    }

    #[test]
    fn test_route_path_starts_at_first_hop() {
        let path = route_path(PRIMARY_ROUTE1);
        assert!(path.starts_with("AERO "));
        assert_eq!(path.matches("->").count(), PRIMARY_ROUTE1.len());
    }

    #[test]
    fn test_empty_route_path() {
        assert_eq!(route_path(&[]), "-");
    }
}
