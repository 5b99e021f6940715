//! Walk the strategy through the states that should and should not make
//! keepers harvest.

use alloy_primitives::U256;
use strategy_harness_fixtures::invariants::{check_above, check_profit_clears};
use strategy_harness_fixtures::{ProfitThresholds, TriggerCheck, TriggerCondition};

use super::{deposit_from_whale, withdraw_and_settle, ScenarioReport, DEFAULT_MAX_REPORT_DELAY_SECS};
use crate::error::Result;
use crate::harvest::HarvestDriver;
use crate::provision::Environment;
use crate::status::check_status;

/// Threshold far above any claimable profit in the fixtures (1M USDC).
const OUT_OF_REACH: U256 = U256::from_limbs([1_000_000_000_000, 0, 0, 0]);

async fn observe(env: &Environment) -> Result<bool> {
    env.strategy
        .harvest_trigger(env.accounts.gov.address(), U256::ZERO)
        .await
}

async fn check_trigger(env: &Environment, report: &mut ScenarioReport, condition: TriggerCondition) -> Result<()> {
    let observed = observe(env).await?;
    report.record_trigger(TriggerCheck::new(condition, observed))
}

pub async fn run_triggers(env: &Environment) -> Result<ScenarioReport> {
    let mut report = ScenarioReport::new("triggers");
    let driver = HarvestDriver::for_env(env);
    let gov = &env.accounts.gov;
    let strategy = &env.strategy;
    let vault = &env.vault;
    let sleep_time = env.config.sleep_time_secs;

    // inactive strategy: no debt ratio, no assets
    let debt_ratio = vault.strategy_params(strategy.address()).await?.debt_ratio;
    vault
        .update_debt_ratio(gov, strategy.address(), U256::ZERO)
        .send()
        .await?;
    report.record_harvest(driver.harvest(strategy).await?);
    check_trigger(env, &mut report, TriggerCondition::Idle).await?;
    vault
        .update_debt_ratio(gov, strategy.address(), debt_ratio)
        .send()
        .await?;

    let starting = deposit_from_whale(env).await?;

    let credit = vault.credit_available(strategy.address()).await?;
    check_above("credit available", credit, U256::ZERO)?;
    strategy
        .set_credit_threshold(gov, U256::from(1u64))
        .send()
        .await?;
    check_trigger(env, &mut report, TriggerCondition::CreditAboveThreshold).await?;
    strategy
        .set_credit_threshold(gov, U256::from(10u64).pow(U256::from(24u64)))
        .send()
        .await?;
    check_trigger(env, &mut report, TriggerCondition::CreditBelowThreshold).await?;

    strategy
        .set_force_harvest_trigger_once(gov, true)
        .send()
        .await?;
    check_trigger(env, &mut report, TriggerCondition::ForcedHarvest).await?;

    report.record_harvest(driver.harvest(strategy).await?);
    check_trigger(env, &mut report, TriggerCondition::JustHarvested).await?;

    env.fork.sleep(sleep_time).await?;

    if env.config.no_profit {
        tracing::warn!("no profit expected, skipping profit threshold checks");
    } else {
        let claimable = strategy.claimable_profit_in_usdc().await?;
        check_above("claimable profit", claimable, U256::ZERO)?;

        for (condition, thresholds) in [
            (
                TriggerCondition::ProfitAboveMin,
                ProfitThresholds::new(U256::from(1u64), OUT_OF_REACH),
            ),
            (
                TriggerCondition::ProfitAboveMax,
                ProfitThresholds::new(OUT_OF_REACH, U256::from(1u64)),
            ),
        ] {
            check_profit_clears(thresholds, claimable)?;
            strategy
                .set_harvest_trigger_params(gov, thresholds)
                .send()
                .await?;
            check_trigger(env, &mut report, condition).await?;
        }
        strategy
            .set_harvest_trigger_params(gov, ProfitThresholds::default())
            .send()
            .await?;
    }

    strategy
        .set_max_report_delay(gov, sleep_time.saturating_sub(1))
        .send()
        .await?;
    check_trigger(env, &mut report, TriggerCondition::ReportOverdue).await?;
    strategy
        .set_max_report_delay(gov, DEFAULT_MAX_REPORT_DELAY_SECS)
        .send()
        .await?;

    report.record_harvest(driver.harvest(strategy).await?);
    env.fork.sleep(sleep_time).await?;

    let oracle_gov = env.fork.impersonate(env.oracle.governance().await?).await?;
    env.oracle
        .set_manual_base_fee(&oracle_gov, false)
        .send()
        .await?;
    check_trigger(env, &mut report, TriggerCondition::BaseFeeTooHigh).await?;
    env.oracle
        .set_manual_base_fee(&oracle_gov, true)
        .send()
        .await?;

    if driver.mode().donates() {
        // collect what the last trade delivered
        let result = report.record_harvest(driver.harvest(strategy).await?);
        report.status = Some(check_status(strategy, vault).await?);
        if !env.config.no_profit {
            check_above("harvest profit", result.profit, U256::ZERO)?;
        }
    }

    withdraw_and_settle(env, &mut report, starting, None).await?;
    Ok(report)
}
