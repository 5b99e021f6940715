//! End-to-end scenarios run against a provisioned environment.

mod cloning;
mod report;
mod triggers;

pub use cloning::run_cloning;
pub use report::{Outcome, ScenarioReport};
pub use triggers::run_triggers;

use alloy_primitives::U256;
use strategy_harness_fixtures::invariants::{check_depositor_outcome, check_non_decreasing};

use crate::error::Result;
use crate::provision::Environment;

/// Wait after the last harvest so locked profit unlocks before withdrawing.
pub const UNLOCK_WAIT_SECS: u64 = 5 * 24 * 60 * 60;

/// Max report delay restored after the overdue check (21 days).
pub const DEFAULT_MAX_REPORT_DELAY_SECS: u64 = 21 * 24 * 60 * 60;

/// Approve the vault and deposit the fixture amount from the whale.
/// Returns the whale's balance before the deposit.
pub(crate) async fn deposit_from_whale(env: &Environment) -> Result<U256> {
    let whale = &env.accounts.whale;
    let starting = env.token.balance_of(whale.address()).await?;
    whale
        .approve(env.token.address(), env.vault.address(), U256::MAX)
        .send()
        .await?;
    env.vault
        .deposit(whale, env.funding.amount)
        .send()
        .await?;
    tracing::info!(amount = %env.funding.amount, vault = %env.vault.address(), "whale deposited");
    Ok(starting)
}

/// Let profit unlock, withdraw the whale's position and check it came out
/// ahead (or even, when no profit is expected).
pub(crate) async fn withdraw_and_settle(
    env: &Environment,
    report: &mut ScenarioReport,
    starting: U256,
    pps_floor: Option<U256>,
) -> Result<()> {
    env.fork.sleep_and_mine(UNLOCK_WAIT_SECS).await?;

    let whale = &env.accounts.whale;
    env.vault.withdraw(whale).send().await?;
    let ending = env.token.balance_of(whale.address()).await?;
    report.starting_balance = Some(starting);
    report.ending_balance = Some(ending);
    tracing::info!(%starting, %ending, "whale withdrew");

    check_depositor_outcome(
        starting,
        ending,
        env.config.no_profit,
        env.config.depositor_tolerance(),
    )?;
    if let Some(floor) = pps_floor {
        let pps = env.vault.price_per_share().await?;
        check_non_decreasing("price per share", floor, pps)?;
    }
    Ok(())
}
