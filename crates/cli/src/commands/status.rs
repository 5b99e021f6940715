//! Status command implementation.

use anyhow::{Context, Result};
use strategy_harness::{check_status, Fork, StrategyHandle, VaultHandle};

use super::parse_address;
use crate::cli::{OutputFormat, StatusArgs};
use crate::output::format_status_detail;

pub async fn run_status(args: &StatusArgs, format: OutputFormat) -> Result<()> {
    let vault = parse_address("vault", &args.vault)?;
    let strategy = parse_address("strategy", &args.strategy)?;

    let fork = Fork::connect(&args.rpc_url)?;
    let vault = VaultHandle::new(vault, fork.provider().clone());
    let strategy = StrategyHandle::new(strategy, fork.provider().clone());

    let status = check_status(&strategy, &vault)
        .await
        .context("strategy status check failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Table => println!("{}", format_status_detail(&status)),
    }
    Ok(())
}
