//! Strategy status and debt-ratio checks.

use alloy_primitives::{Address, U256};
use serde::Serialize;
use strategy_harness_fixtures::invariants::{check_bps, check_debt_ratio_sum};
use strategy_harness_fixtures::StrategyParams;

use crate::error::Result;
use crate::handles::{StrategyHandle, VaultHandle};

/// Snapshot of a strategy's standing in its vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyStatus {
    pub strategy: Address,
    pub params: StrategyParams,
    pub estimated_total_assets: U256,
    /// Aggregate debt ratio the vault reports.
    pub vault_debt_ratio: U256,
    /// Withdrawal queue with each strategy's debt ratio.
    pub queue: Vec<(Address, U256)>,
    pub queue_debt_ratio: U256,
}

/// Read the strategy's vault record and check the debt-ratio bookkeeping.
///
/// Read-only. Fails with an invariant violation when any debt ratio exceeds
/// 10 000 bps, the min/max debt per harvest are inverted, or an active
/// strategy reports before its activation.
pub async fn check_status(strategy: &StrategyHandle, vault: &VaultHandle) -> Result<StrategyStatus> {
    let address = strategy.address();
    let params = vault.strategy_params(address).await?;
    let estimated_total_assets = strategy.estimated_total_assets().await?;
    let vault_debt_ratio = vault.debt_ratio().await?;

    let mut queue = Vec::new();
    for member in vault.withdrawal_queue().await? {
        let ratio = vault.strategy_params(member).await?.debt_ratio;
        queue.push((member, ratio));
    }

    tracing::info!(
        strategy = %address,
        debt_ratio = %params.debt_ratio,
        total_debt = %params.total_debt,
        total_gain = %params.total_gain,
        total_loss = %params.total_loss,
        %estimated_total_assets,
        "strategy status"
    );

    params.check()?;
    check_bps("vault debt ratio", vault_debt_ratio)?;
    let ratios: Vec<U256> = queue.iter().map(|(_, ratio)| *ratio).collect();
    let queue_debt_ratio = check_debt_ratio_sum(&ratios)?;
    tracing::debug!(queue_len = queue.len(), %queue_debt_ratio, %vault_debt_ratio, "debt ratios");

    Ok(StrategyStatus {
        strategy: address,
        params,
        estimated_total_assets,
        vault_debt_ratio,
        queue,
        queue_debt_ratio,
    })
}
