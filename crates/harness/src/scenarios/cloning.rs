//! Clone the strategy, migrate the vault to the clone and make sure the
//! clone earns like the original.

use alloy_primitives::U256;
use strategy_harness_fixtures::invariants::{check_above, check_non_decreasing, estimate_apr};
use strategy_harness_fixtures::{Violation, MAX_BPS};

use super::{deposit_from_whale, withdraw_and_settle, ScenarioReport};
use crate::error::Result;
use crate::harvest::HarvestDriver;
use crate::provision::Environment;
use crate::revert::expect_revert;

pub async fn run_cloning(env: &Environment) -> Result<ScenarioReport> {
    const NAME: &str = "cloning";
    if !env.config.is_clonable {
        tracing::warn!("strategy is not clonable, skipping cloning scenario");
        return Ok(ScenarioReport::skipped(NAME, "strategy is not clonable"));
    }

    let mut report = ScenarioReport::new(NAME);
    let driver = HarvestDriver::for_env(env);
    let gov = &env.accounts.gov;
    let original = &env.strategy;

    let starting = deposit_from_whale(env).await?;
    report.record_harvest(driver.harvest(original).await?);
    let pps_before = env.vault.price_per_share().await?;

    let wiring = env.wiring();
    if env.config.expect_reverts {
        expect_revert(original.initialize(gov, &wiring)).await?;
    }
    let clone_call = original.clone_strategy(gov, &wiring);
    let clone_address = clone_call.simulate().await?;
    clone_call.send().await?;
    let clone = original.at(clone_address);
    tracing::info!(clone = %clone_address, "cloned strategy");

    if env.config.expect_reverts {
        expect_revert(clone.initialize(gov, &wiring)).await?;
        expect_revert(clone.clone_strategy(gov, &wiring)).await?;
    } else {
        tracing::warn!("revert checks disabled, not checking re-initialization");
    }

    // move everything from the original to the clone
    env.vault
        .revoke_strategy(gov, original.address())
        .send()
        .await?;
    report.record_harvest(driver.harvest(original).await?);
    env.vault
        .remove_from_queue(gov, original.address())
        .send()
        .await?;
    env.vault
        .add_strategy(gov, clone_address, U256::from(MAX_BPS))
        .send()
        .await?;

    let queue = env.vault.withdrawal_queue().await?;
    if queue.first() != Some(&clone_address) {
        return Err(Violation::new(
            "withdrawal queue",
            format!("clone {clone_address} is not first in {queue:?}"),
        )
        .into());
    }
    let clone_ratio = env.vault.strategy_params(clone_address).await?.debt_ratio;
    if clone_ratio != U256::from(MAX_BPS) {
        return Err(Violation::new("clone debt ratio", format!("{clone_ratio} bps")).into());
    }
    let original_ratio = env.vault.strategy_params(original.address()).await?.debt_ratio;
    if !original_ratio.is_zero() {
        return Err(Violation::new("revoked debt ratio", format!("{original_ratio} bps")).into());
    }

    report.record_harvest(driver.harvest(&clone).await?);
    let old_assets = env.vault.total_assets().await?;
    check_above("vault total assets", old_assets, U256::ZERO)?;
    let idle = env.token.balance_of(clone_address).await?;
    if !idle.is_zero() {
        return Err(Violation::new("idle want", format!("clone holds {idle} unstaked")).into());
    }
    check_above(
        "clone estimated assets",
        clone.estimated_total_assets().await?,
        U256::ZERO,
    )?;

    let sleep_time = env.config.sleep_time_secs;
    env.fork.sleep(sleep_time).await?;
    report.record_harvest(driver.harvest(&clone).await?);
    if driver.mode().donates() {
        // the first harvest only kicks off the trade
        report.record_harvest(driver.harvest(&clone).await?);
    }
    let new_assets = env.vault.total_assets().await?;
    check_non_decreasing("vault total assets", old_assets, new_assets)?;

    report.estimated_apr = estimate_apr(
        old_assets,
        new_assets,
        sleep_time,
        clone.estimated_total_assets().await?,
    );
    if let Some(apr) = report.estimated_apr {
        tracing::info!(apr = %apr.round_dp(4), "estimated APR");
    }

    withdraw_and_settle(env, &mut report, starting, Some(pps_before)).await?;
    Ok(report)
}
