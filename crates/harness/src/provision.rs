//! Fixture provisioning.
//!
//! [`Provisioner::provision`] turns a [`HarnessConfig`] into a ready
//! [`Environment`]: chain profile, funded accounts, validated routes, a
//! vault and a strategy holding the vault's full debt ratio. Each stage is a
//! method of its own so tests can stop after any of them.

use alloy::sol_types::SolValue;
use alloy_primitives::{Address, U256};
use strategy_harness_contracts::{ContractArtifact, Fork, ImpersonatedSigner};
use strategy_harness_fixtures::{
    ChainProfile, PoolFixture, ProfitToken, SwapRoute, Violation, MAX_BPS,
};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::handles::{
    sol_route, BaseFeeOracleHandle, StrategyHandle, StrategyWiring, TokenHandle, VaultHandle,
};

/// The whale must hold this multiple of the deposit.
pub const WHALE_FUNDING_MULTIPLE: u64 = 2;

/// The profit whale must hold this multiple of the profit donation.
pub const PROFIT_FUNDING_MULTIPLE: u64 = 5;

/// Impersonated accounts used throughout a run.
#[derive(Debug, Clone)]
pub struct Accounts {
    pub gov: ImpersonatedSigner,
    /// Also acts as rewards, guardian, strategist and keeper.
    pub management: ImpersonatedSigner,
    pub whale: ImpersonatedSigner,
    pub profit_whale: ImpersonatedSigner,
}

/// Amounts resolved to base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Funding {
    pub decimals: u8,
    /// Deposit made by the whale.
    pub amount: U256,
    /// Token the profit whale donates.
    pub profit_token: Address,
    pub profit_amount: U256,
}

/// Everything a scenario needs, fully wired.
pub struct Environment {
    pub fork: Fork,
    pub config: HarnessConfig,
    pub profile: &'static ChainProfile,
    pub pool: &'static PoolFixture,
    pub accounts: Accounts,
    pub funding: Funding,
    pub token: TokenHandle,
    pub route0: SwapRoute,
    pub route1: SwapRoute,
    pub vault: VaultHandle,
    pub strategy: StrategyHandle,
    pub oracle: BaseFeeOracleHandle,
}

impl Environment {
    /// Arguments for initializing or cloning a strategy on this vault.
    pub fn wiring(&self) -> StrategyWiring {
        StrategyWiring {
            vault: self.vault.address(),
            strategist: self.profile.strategist(),
            rewards: self.profile.rewards(),
            keeper: self.profile.keeper(),
            gauge: self.pool.gauge,
            route0: sol_route(&self.route0),
            route1: sol_route(&self.route1),
        }
    }
}

/// Builds an [`Environment`] on a fork.
pub struct Provisioner<'a> {
    fork: &'a Fork,
    config: &'a HarnessConfig,
}

impl<'a> Provisioner<'a> {
    pub fn new(fork: &'a Fork, config: &'a HarnessConfig) -> Self {
        Self { fork, config }
    }

    /// Run every stage in order.
    pub async fn provision(&self) -> Result<Environment> {
        let profile = self.profile().await?;
        let pool = self.pool(profile)?;
        let (accounts, funding) = self.accounts(profile, pool).await?;
        let (route0, route1) = self.routes(profile, pool)?;
        let vault = self.vault(profile, pool, &accounts).await?;
        let (strategy, oracle) = self
            .strategy(profile, pool, &accounts, &vault, &route0, &route1)
            .await?;

        tracing::info!(
            pool = pool.name,
            vault = %vault.address(),
            strategy = %strategy.address(),
            "environment ready"
        );

        Ok(Environment {
            fork: self.fork.clone(),
            config: self.config.clone(),
            profile,
            pool,
            token: TokenHandle::new(pool.token, self.fork.provider().clone()),
            accounts,
            funding,
            route0,
            route1,
            vault,
            strategy,
            oracle,
        })
    }

    /// Resolve the chain profile from the fork and check it against the config.
    pub async fn profile(&self) -> Result<&'static ChainProfile> {
        let actual = self.fork.chain_id().await?;
        let expected = u64::from(self.config.chain);
        if actual != expected {
            return Err(HarnessError::ChainMismatch { expected, actual });
        }
        let profile = ChainProfile::for_chain_id(actual)?;
        tracing::info!(chain = %profile.chain, "resolved chain profile");
        Ok(profile)
    }

    /// The configured pool, which must live on the profile's chain.
    pub fn pool(&self, profile: &ChainProfile) -> Result<&'static PoolFixture> {
        let pool = self.config.pool.fixture();
        if pool.chain != profile.chain {
            return Err(HarnessError::ChainMismatch {
                expected: u64::from(pool.chain),
                actual: profile.chain_id(),
            });
        }
        Ok(pool)
    }

    /// Impersonate the run's accounts and check that the whales can cover
    /// the deposit and the profit donations.
    pub async fn accounts(
        &self,
        profile: &ChainProfile,
        pool: &PoolFixture,
    ) -> Result<(Accounts, Funding)> {
        let accounts = Accounts {
            gov: self.fork.impersonate(profile.governance).await?,
            management: self.fork.impersonate(profile.management).await?,
            whale: self.fork.impersonate(pool.whale).await?,
            profit_whale: self.fork.impersonate(pool.profit_whale).await?,
        };

        let provider = self.fork.provider().clone();
        let token = TokenHandle::new(pool.token, provider.clone());
        let decimals = token.decimals().await?;
        let amount = pool.deposit.to_base_units(decimals)?;
        require_balance(
            &token,
            "whale",
            pool.whale,
            amount.saturating_mul(U256::from(WHALE_FUNDING_MULTIPLE)),
        )
        .await?;

        let profit_token = match pool.profit_token {
            ProfitToken::Sweep => profile.require_sweep_token()?,
            ProfitToken::Pool => pool.token,
        };
        let profit_handle = TokenHandle::new(profit_token, provider);
        let profit_decimals = if profit_token == pool.token {
            decimals
        } else {
            profit_handle.decimals().await?
        };
        let profit_amount = pool.profit_amount.to_base_units(profit_decimals)?;
        require_balance(
            &profit_handle,
            "profit whale",
            pool.profit_whale,
            profit_amount.saturating_mul(U256::from(PROFIT_FUNDING_MULTIPLE)),
        )
        .await?;

        tracing::debug!(%amount, %profit_amount, decimals, "funding checked");
        Ok((
            accounts,
            Funding {
                decimals,
                amount,
                profit_token,
                profit_amount,
            },
        ))
    }

    /// Validate both routes against the chain's sweep token.
    pub fn routes(
        &self,
        profile: &ChainProfile,
        pool: &PoolFixture,
    ) -> Result<(SwapRoute, SwapRoute)> {
        let sweep = profile.require_sweep_token()?;
        let route0 = pool.route0();
        let route1 = pool.route1();
        for route in [&route0, &route1] {
            route
                .validate(sweep)
                .map_err(strategy_harness_fixtures::FixtureError::from)?;
        }
        Ok((route0, route1))
    }

    /// Attach to the configured vault or deploy and initialize a new one.
    pub async fn vault(
        &self,
        profile: &ChainProfile,
        pool: &PoolFixture,
        accounts: &Accounts,
    ) -> Result<VaultHandle> {
        let provider = self.fork.provider().clone();
        if let Some(address) = self.config.vault_address {
            let vault = VaultHandle::new(address, provider);
            let token = vault.token().await?;
            if token != pool.token {
                return Err(HarnessError::VaultTokenMismatch {
                    vault: address,
                    expected: pool.token,
                    actual: token,
                });
            }
            tracing::info!(vault = %address, "attaching to existing vault");
            return Ok(vault);
        }

        let artifact = load_artifact(self.config.vault_artifact.as_deref(), "vault")?;
        let guardian = &accounts.management;
        let address = guardian.deploy(artifact.name(), artifact.deploy_code(&[])).await?;
        let vault = VaultHandle::new(address, provider);

        vault
            .initialize(guardian, pool.token, profile.governance, profile.rewards())
            .send()
            .await?;
        vault
            .set_deposit_limit(&accounts.gov, U256::MAX)
            .send()
            .await?;
        vault
            .set_management(&accounts.gov, profile.management)
            .send()
            .await?;
        Ok(vault)
    }

    /// Deploy the strategy, attach it to the vault and put the base-fee
    /// oracle into manual mode.
    pub async fn strategy(
        &self,
        profile: &ChainProfile,
        pool: &PoolFixture,
        accounts: &Accounts,
        vault: &VaultHandle,
        route0: &SwapRoute,
        route1: &SwapRoute,
    ) -> Result<(StrategyHandle, BaseFeeOracleHandle)> {
        let provider = self.fork.provider().clone();
        let gov = &accounts.gov;
        let management = &accounts.management;

        let artifact = load_artifact(self.config.strategy_artifact.as_deref(), "strategy")?;
        let args = (
            vault.address(),
            pool.gauge,
            sol_route(route0),
            sol_route(route1),
        )
            .abi_encode_params();
        let address = gov.deploy(artifact.name(), artifact.deploy_code(&args)).await?;
        let strategy = StrategyHandle::new(address, provider.clone());

        strategy.set_keeper(gov, profile.keeper()).send().await?;
        vault.set_management_fee(gov, U256::ZERO).send().await?;
        vault.set_performance_fee(gov, U256::ZERO).send().await?;
        vault
            .add_strategy(gov, address, U256::from(MAX_BPS))
            .send()
            .await?;
        self.fork.sleep(1).await?;

        if pool.resets_routes {
            strategy
                .set_swap_routes(management, route0, route1)
                .send()
                .await?;
        }

        let oracle = BaseFeeOracleHandle::new(profile.base_fee_oracle, provider);
        strategy
            .set_base_fee_oracle(management, oracle.address())
            .send()
            .await?;
        let oracle_gov = self.fork.impersonate(oracle.governance().await?).await?;
        oracle
            .set_base_fee_provider(&oracle_gov, Address::ZERO)
            .send()
            .await?;
        oracle.set_manual_base_fee(&oracle_gov, true).send().await?;

        if !strategy.is_base_fee_acceptable().await? {
            return Err(HarnessError::BaseFeeNotAcceptable(address));
        }
        let params = vault.strategy_params(address).await?;
        if params.debt_ratio != U256::from(MAX_BPS) {
            return Err(Violation::new(
                "strategy debt ratio",
                format!("new strategy holds {} bps, expected {MAX_BPS}", params.debt_ratio),
            )
            .into());
        }

        tracing::info!(strategy = %address, "strategy attached");
        Ok((strategy, oracle))
    }
}

async fn require_balance(
    token: &TokenHandle,
    role: &'static str,
    account: Address,
    need: U256,
) -> Result<()> {
    let have = token.balance_of(account).await?;
    if have < need {
        return Err(HarnessError::InsufficientFunding {
            role,
            account,
            token: token.address(),
            have,
            need,
        });
    }
    Ok(())
}

fn load_artifact(path: Option<&std::path::Path>, kind: &'static str) -> Result<ContractArtifact> {
    let path = path.ok_or(HarnessError::MissingArtifact(kind))?;
    Ok(ContractArtifact::load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact() {
        let err = load_artifact(None, "vault").unwrap_err();
        assert!(matches!(err, HarnessError::MissingArtifact("vault")));
    }

    #[test]
    fn test_unreadable_artifact() {
        let err = load_artifact(Some(std::path::Path::new("/nonexistent/Vault.json")), "vault")
            .unwrap_err();
        assert!(matches!(err, HarnessError::Contract(_)));
    }
}
