//! Fork scenario commands.

use anyhow::{Context, Result};
use strategy_harness::scenarios::{self, ScenarioReport};
use strategy_harness::{Environment, Fork, HarnessConfig, Provisioner};

use super::parse_address;
use crate::cli::{OutputFormat, ScenarioArgs};
use crate::output::format_report_detail;

pub async fn run_cloning(args: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let (fork, config) = prepare(args)?;
    let env = provision(&fork, &config).await?;
    let report = scenarios::run_cloning(&env)
        .await
        .context("cloning scenario failed")?;
    print_report(&report, format)
}

pub async fn run_triggers(args: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let (fork, config) = prepare(args)?;
    let env = provision(&fork, &config).await?;
    let report = scenarios::run_triggers(&env)
        .await
        .context("harvest trigger scenario failed")?;
    print_report(&report, format)
}

/// Load the configuration and apply command-line overrides on top of it.
fn prepare(args: &ScenarioArgs) -> Result<(Fork, HarnessConfig)> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_json_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => HarnessConfig::new(),
    }
    .with_env_artifacts();

    if let Some(pool) = args.pool {
        config = config.with_pool(pool);
    }
    if let Some(mode) = args.mode {
        config = config.with_harvest_mode(mode.into_mode(args.target));
    }
    if let Some(vault) = &args.vault {
        config = config.with_vault_address(parse_address("vault", vault)?);
    }
    if args.no_revert_checks {
        config = config.with_expect_reverts(false);
    }

    let fork = Fork::connect(&args.rpc_url)?;
    Ok((fork, config))
}

async fn provision(fork: &Fork, config: &HarnessConfig) -> Result<Environment> {
    Provisioner::new(fork, config)
        .provision()
        .await
        .context("failed to provision the fork")
}

fn print_report(report: &ScenarioReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => println!("{}", format_report_detail(report)),
    }
    Ok(())
}
