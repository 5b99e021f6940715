//! Harvest-cycle driver.

use alloy::rpc::types::Log;
use alloy_primitives::{Address, U256};
use strategy_harness_contracts::strategy::IVelodromeStrategy::Harvested;
use strategy_harness_contracts::{ContractError, Fork, ImpersonatedSigner};
use strategy_harness_fixtures::{format_units, HarvestResult};

use crate::config::HarvestMode;
use crate::error::Result;
use crate::handles::StrategyHandle;
use crate::provision::Environment;

/// Sends harvests and decodes what the strategy reported.
pub struct HarvestDriver<'a> {
    fork: &'a Fork,
    mode: HarvestMode,
    gov: &'a ImpersonatedSigner,
    profit_whale: &'a ImpersonatedSigner,
    profit_token: Address,
    profit_amount: U256,
    decimals: u8,
}

impl<'a> HarvestDriver<'a> {
    pub fn new(
        fork: &'a Fork,
        mode: HarvestMode,
        gov: &'a ImpersonatedSigner,
        profit_whale: &'a ImpersonatedSigner,
        profit_token: Address,
        profit_amount: U256,
    ) -> Self {
        Self {
            fork,
            mode,
            gov,
            profit_whale,
            profit_token,
            profit_amount,
            decimals: 18,
        }
    }

    /// Driver configured from a provisioned environment.
    pub fn for_env(env: &'a Environment) -> Self {
        Self::new(
            &env.fork,
            env.config.harvest_mode,
            &env.accounts.gov,
            &env.accounts.profit_whale,
            env.funding.profit_token,
            env.funding.profit_amount,
        )
        .with_decimals(env.funding.decimals)
    }

    /// Decimals used when logging profit and loss.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn mode(&self) -> HarvestMode {
        self.mode
    }

    /// Run one harvest of `strategy` from governance.
    ///
    /// Reverts are returned as-is; nothing is retried.
    pub async fn harvest(&self, strategy: &StrategyHandle) -> Result<HarvestResult> {
        self.fork.sleep_and_mine(1).await?;

        if self.mode.donates() {
            self.profit_whale
                .transfer(self.profit_token, strategy.address(), self.profit_amount)
                .send()
                .await?;
            tracing::debug!(amount = %self.profit_amount, token = %self.profit_token, "donated trade proceeds");
        }
        if let HarvestMode::ExternalSettlement { target } = self.mode {
            self.fork.mine(target).await?;
        }

        let receipt = strategy.harvest(self.gov).send().await?;
        let result = harvested_from_logs(receipt.inner.logs(), strategy.address()).ok_or(
            ContractError::MissingEvent {
                event: "Harvested",
                emitter: strategy.address(),
            },
        )?;

        tracing::info!(
            strategy = %strategy.address(),
            mode = %self.mode,
            profit = %format_units(result.profit, self.decimals),
            loss = %format_units(result.loss, self.decimals),
            "harvested"
        );
        Ok(result)
    }
}

/// The last `Harvested` event emitted by `strategy` in `logs`.
pub fn harvested_from_logs(logs: &[Log], strategy: Address) -> Option<HarvestResult> {
    let event = logs
        .iter()
        .rev()
        .filter(|log| log.address() == strategy)
        .find_map(|log| log.log_decode::<Harvested>().ok())?
        .inner
        .data;
    Some(HarvestResult::new(
        event.profit,
        event.loss,
        event.debtPayment,
        event.debtOutstanding,
    ))
}
