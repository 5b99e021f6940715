//! Typed handles over the deployed vault, strategy and tokens.
//!
//! Views go through `eth_call` from the zero address. State-changing calls
//! are returned as [`PreparedCall`]s bound to the signer that must send
//! them, so the caller decides whether to send or dry-run.

use alloy::sol_types::SolCall;
use alloy_primitives::{Address, U256};
use strategy_harness_contracts::erc20::IERC20;
use strategy_harness_contracts::oracle::IBaseFeeOracle;
use strategy_harness_contracts::strategy::{IVelodromeStrategy, Route};
use strategy_harness_contracts::vault::IYearnVault;
use strategy_harness_contracts::{ForkProvider, ImpersonatedSigner, PreparedCall};
use strategy_harness_fixtures::{ProfitThresholds, StrategyParams, SwapRoute};

use crate::error::Result;

/// Upper bound on a Yearn V2 withdrawal queue.
pub const MAX_QUEUE_LENGTH: u64 = 20;

async fn view<C: SolCall>(provider: &ForkProvider, to: Address, call: C) -> Result<C::Return> {
    Ok(PreparedCall::new(Address::ZERO, to, call, provider)
        .simulate()
        .await?)
}

/// Convert a route fixture into the router's struct layout.
pub fn sol_route(route: &SwapRoute) -> Vec<Route> {
    route
        .hops()
        .iter()
        .map(|hop| Route {
            from: hop.from,
            to: hop.to,
            stable: hop.stable,
            factory: hop.factory,
        })
        .collect()
}

/// An ERC-20 token.
#[derive(Clone)]
pub struct TokenHandle {
    address: Address,
    provider: ForkProvider,
}

impl TokenHandle {
    pub fn new(address: Address, provider: ForkProvider) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        view(&self.provider, self.address, IERC20::balanceOfCall { account }).await
    }

    pub async fn decimals(&self) -> Result<u8> {
        view(&self.provider, self.address, IERC20::decimalsCall {}).await
    }
}

/// A Yearn V2 vault.
#[derive(Clone, Debug)]
pub struct VaultHandle {
    address: Address,
    provider: ForkProvider,
}

impl VaultHandle {
    pub fn new(address: Address, provider: ForkProvider) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn token(&self) -> Result<Address> {
        view(&self.provider, self.address, IYearnVault::tokenCall {}).await
    }

    pub async fn total_assets(&self) -> Result<U256> {
        view(&self.provider, self.address, IYearnVault::totalAssetsCall {}).await
    }

    pub async fn price_per_share(&self) -> Result<U256> {
        view(&self.provider, self.address, IYearnVault::pricePerShareCall {}).await
    }

    /// Aggregate debt ratio over all strategies.
    pub async fn debt_ratio(&self) -> Result<U256> {
        view(&self.provider, self.address, IYearnVault::debtRatioCall {}).await
    }

    pub async fn credit_available(&self, strategy: Address) -> Result<U256> {
        view(
            &self.provider,
            self.address,
            IYearnVault::creditAvailableCall { strategy },
        )
        .await
    }

    /// The vault's bookkeeping record for `strategy`.
    pub async fn strategy_params(&self, strategy: Address) -> Result<StrategyParams> {
        let r = view(
            &self.provider,
            self.address,
            IYearnVault::strategiesCall { strategy },
        )
        .await?;
        Ok(StrategyParams {
            performance_fee: r.performanceFee,
            activation: r.activation,
            debt_ratio: r.debtRatio,
            min_debt_per_harvest: r.minDebtPerHarvest,
            max_debt_per_harvest: r.maxDebtPerHarvest,
            last_report: r.lastReport,
            total_debt: r.totalDebt,
            total_gain: r.totalGain,
            total_loss: r.totalLoss,
        })
    }

    /// Strategies in withdrawal order. The queue ends at the first empty slot.
    pub async fn withdrawal_queue(&self) -> Result<Vec<Address>> {
        let mut queue = Vec::new();
        for index in 0..MAX_QUEUE_LENGTH {
            let strategy = view(
                &self.provider,
                self.address,
                IYearnVault::withdrawalQueueCall {
                    index: U256::from(index),
                },
            )
            .await?;
            if strategy.is_zero() {
                break;
            }
            queue.push(strategy);
        }
        Ok(queue)
    }

    /// Initialize a freshly deployed vault. Sent by the guardian.
    pub fn initialize<'a>(
        &self,
        guardian: &'a ImpersonatedSigner,
        token: Address,
        governance: Address,
        rewards: Address,
    ) -> PreparedCall<'a, IYearnVault::initializeCall> {
        guardian.prepare(
            self.address,
            IYearnVault::initializeCall {
                token,
                governance,
                rewards,
                nameOverride: String::new(),
                symbolOverride: String::new(),
                guardian: guardian.address(),
            },
        )
    }

    pub fn set_deposit_limit<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        limit: U256,
    ) -> PreparedCall<'a, IYearnVault::setDepositLimitCall> {
        gov.prepare(self.address, IYearnVault::setDepositLimitCall { limit })
    }

    pub fn set_management<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        management: Address,
    ) -> PreparedCall<'a, IYearnVault::setManagementCall> {
        gov.prepare(self.address, IYearnVault::setManagementCall { management })
    }

    pub fn set_management_fee<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        fee: U256,
    ) -> PreparedCall<'a, IYearnVault::setManagementFeeCall> {
        gov.prepare(self.address, IYearnVault::setManagementFeeCall { fee })
    }

    pub fn set_performance_fee<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        fee: U256,
    ) -> PreparedCall<'a, IYearnVault::setPerformanceFeeCall> {
        gov.prepare(self.address, IYearnVault::setPerformanceFeeCall { fee })
    }

    pub fn deposit<'a>(
        &self,
        depositor: &'a ImpersonatedSigner,
        amount: U256,
    ) -> PreparedCall<'a, IYearnVault::depositCall> {
        depositor.prepare(self.address, IYearnVault::depositCall { amount })
    }

    /// Withdraw the depositor's whole position.
    pub fn withdraw<'a>(
        &self,
        depositor: &'a ImpersonatedSigner,
    ) -> PreparedCall<'a, IYearnVault::withdrawCall> {
        depositor.prepare(self.address, IYearnVault::withdrawCall {})
    }

    pub fn add_strategy<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        strategy: Address,
        debt_ratio: U256,
    ) -> PreparedCall<'a, IYearnVault::addStrategyCall> {
        gov.prepare(
            self.address,
            IYearnVault::addStrategyCall {
                strategy,
                debtRatio: debt_ratio,
                minDebtPerHarvest: U256::ZERO,
                maxDebtPerHarvest: U256::MAX,
                performanceFee: U256::ZERO,
            },
        )
    }

    pub fn update_debt_ratio<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        strategy: Address,
        debt_ratio: U256,
    ) -> PreparedCall<'a, IYearnVault::updateStrategyDebtRatioCall> {
        gov.prepare(
            self.address,
            IYearnVault::updateStrategyDebtRatioCall {
                strategy,
                debtRatio: debt_ratio,
            },
        )
    }

    pub fn revoke_strategy<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        strategy: Address,
    ) -> PreparedCall<'a, IYearnVault::revokeStrategyCall> {
        gov.prepare(self.address, IYearnVault::revokeStrategyCall { strategy })
    }

    pub fn remove_from_queue<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
        strategy: Address,
    ) -> PreparedCall<'a, IYearnVault::removeStrategyFromQueueCall> {
        gov.prepare(
            self.address,
            IYearnVault::removeStrategyFromQueueCall { strategy },
        )
    }
}

/// Arguments shared by `initialize` and `cloneStrategyVelodrome`.
#[derive(Clone)]
pub struct StrategyWiring {
    pub vault: Address,
    pub strategist: Address,
    pub rewards: Address,
    pub keeper: Address,
    pub gauge: Address,
    pub route0: Vec<Route>,
    pub route1: Vec<Route>,
}

impl StrategyWiring {
    pub fn initialize_call(&self) -> IVelodromeStrategy::initializeCall {
        IVelodromeStrategy::initializeCall {
            vault: self.vault,
            strategist: self.strategist,
            rewards: self.rewards,
            keeper: self.keeper,
            gauge: self.gauge,
            swapRouteForToken0: self.route0.clone(),
            swapRouteForToken1: self.route1.clone(),
        }
    }

    pub fn clone_call(&self) -> IVelodromeStrategy::cloneStrategyVelodromeCall {
        IVelodromeStrategy::cloneStrategyVelodromeCall {
            vault: self.vault,
            strategist: self.strategist,
            rewards: self.rewards,
            keeper: self.keeper,
            gauge: self.gauge,
            swapRouteForToken0: self.route0.clone(),
            swapRouteForToken1: self.route1.clone(),
        }
    }
}

/// A deployed strategy.
#[derive(Clone)]
pub struct StrategyHandle {
    address: Address,
    provider: ForkProvider,
}

impl StrategyHandle {
    pub fn new(address: Address, provider: ForkProvider) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Another strategy on the same fork, e.g. a clone of this one.
    pub fn at(&self, address: Address) -> Self {
        Self::new(address, self.provider.clone())
    }

    pub async fn harvest_trigger(&self, caller: Address, call_cost: U256) -> Result<bool> {
        Ok(PreparedCall::new(
            caller,
            self.address,
            IVelodromeStrategy::harvestTriggerCall {
                callCostInWei: call_cost,
            },
            &self.provider,
        )
        .simulate()
        .await?)
    }

    pub async fn is_base_fee_acceptable(&self) -> Result<bool> {
        view(
            &self.provider,
            self.address,
            IVelodromeStrategy::isBaseFeeAcceptableCall {},
        )
        .await
    }

    pub async fn claimable_profit_in_usdc(&self) -> Result<U256> {
        view(
            &self.provider,
            self.address,
            IVelodromeStrategy::claimableProfitInUsdcCall {},
        )
        .await
    }

    pub async fn estimated_total_assets(&self) -> Result<U256> {
        view(
            &self.provider,
            self.address,
            IVelodromeStrategy::estimatedTotalAssetsCall {},
        )
        .await
    }

    pub fn harvest<'a>(
        &self,
        gov: &'a ImpersonatedSigner,
    ) -> PreparedCall<'a, IVelodromeStrategy::harvestCall> {
        gov.prepare(self.address, IVelodromeStrategy::harvestCall {})
    }

    pub fn initialize<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        wiring: &StrategyWiring,
    ) -> PreparedCall<'a, IVelodromeStrategy::initializeCall> {
        sender.prepare(self.address, wiring.initialize_call())
    }

    pub fn clone_strategy<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        wiring: &StrategyWiring,
    ) -> PreparedCall<'a, IVelodromeStrategy::cloneStrategyVelodromeCall> {
        sender.prepare(self.address, wiring.clone_call())
    }

    pub fn set_keeper<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        keeper: Address,
    ) -> PreparedCall<'a, IVelodromeStrategy::setKeeperCall> {
        sender.prepare(self.address, IVelodromeStrategy::setKeeperCall { keeper })
    }

    pub fn set_credit_threshold<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        threshold: U256,
    ) -> PreparedCall<'a, IVelodromeStrategy::setCreditThresholdCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setCreditThresholdCall {
                creditThreshold: threshold,
            },
        )
    }

    pub fn set_force_harvest_trigger_once<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        force: bool,
    ) -> PreparedCall<'a, IVelodromeStrategy::setForceHarvestTriggerOnceCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setForceHarvestTriggerOnceCall {
                forceHarvestTriggerOnce: force,
            },
        )
    }

    pub fn set_harvest_trigger_params<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        thresholds: ProfitThresholds,
    ) -> PreparedCall<'a, IVelodromeStrategy::setHarvestTriggerParamsCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setHarvestTriggerParamsCall {
                harvestProfitMinInUsdc: thresholds.min,
                harvestProfitMaxInUsdc: thresholds.max,
            },
        )
    }

    pub fn set_max_report_delay<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        delay_secs: u64,
    ) -> PreparedCall<'a, IVelodromeStrategy::setMaxReportDelayCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setMaxReportDelayCall {
                delay: U256::from(delay_secs),
            },
        )
    }

    pub fn set_base_fee_oracle<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        oracle: Address,
    ) -> PreparedCall<'a, IVelodromeStrategy::setBaseFeeOracleCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setBaseFeeOracleCall {
                baseFeeOracle: oracle,
            },
        )
    }

    /// Install both reward routes, using the fee-on-transfer swap functions.
    pub fn set_swap_routes<'a>(
        &self,
        sender: &'a ImpersonatedSigner,
        route0: &SwapRoute,
        route1: &SwapRoute,
    ) -> PreparedCall<'a, IVelodromeStrategy::setSwapRoutesCall> {
        sender.prepare(
            self.address,
            IVelodromeStrategy::setSwapRoutesCall {
                swapRouteForToken0: sol_route(route0),
                swapRouteForToken1: sol_route(route1),
                useFeeOnTransfer: true,
            },
        )
    }
}

/// The chain's base-fee oracle.
#[derive(Clone)]
pub struct BaseFeeOracleHandle {
    address: Address,
    provider: ForkProvider,
}

impl BaseFeeOracleHandle {
    pub fn new(address: Address, provider: ForkProvider) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn governance(&self) -> Result<Address> {
        view(&self.provider, self.address, IBaseFeeOracle::governanceCall {}).await
    }

    pub fn set_base_fee_provider<'a>(
        &self,
        governance: &'a ImpersonatedSigner,
        provider: Address,
    ) -> PreparedCall<'a, IBaseFeeOracle::setBaseFeeProviderCall> {
        governance.prepare(
            self.address,
            IBaseFeeOracle::setBaseFeeProviderCall { provider },
        )
    }

    pub fn set_manual_base_fee<'a>(
        &self,
        governance: &'a ImpersonatedSigner,
        acceptable: bool,
    ) -> PreparedCall<'a, IBaseFeeOracle::setManualBaseFeeBoolCall> {
        governance.prepare(
            self.address,
            IBaseFeeOracle::setManualBaseFeeBoolCall {
                manualBaseFeeBool: acceptable,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy_harness_fixtures::route::PRIMARY_ROUTE0;
    use strategy_harness_fixtures::tokens::{AERO, PHAM};

    #[test]
    fn test_sol_route_keeps_hop_order() {
        let route = sol_route(&SwapRoute::from(PRIMARY_ROUTE0));
        assert_eq!(route.len(), 3);
        assert_eq!(route[0].from, AERO);
        assert_eq!(route[2].to, PHAM);
        assert!(route.iter().all(|r| !r.stable));
    }

    #[test]
    fn test_wiring_builds_matching_calls() {
        let wiring = StrategyWiring {
            vault: Address::repeat_byte(1),
            strategist: Address::repeat_byte(2),
            rewards: Address::repeat_byte(3),
            keeper: Address::repeat_byte(4),
            gauge: Address::repeat_byte(5),
            route0: sol_route(&SwapRoute::from(PRIMARY_ROUTE0)),
            route1: Vec::new(),
        };
        let init = wiring.initialize_call().abi_encode();
        let clone = wiring.clone_call().abi_encode();
        // same arguments, different selector
        assert_eq!(init[4..], clone[4..]);
        assert_ne!(init[..4], clone[..4]);
    }
}
