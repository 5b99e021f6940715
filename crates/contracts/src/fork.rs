//! Control of a forked chain node (Anvil).
//!
//! Time only moves when the harness moves it: [`Fork::sleep`] jumps the
//! clock and [`Fork::mine`] produces blocks.

use alloy::primitives::{Address, U256};
use alloy::providers::{ext::AnvilApi, Provider};

use crate::error::{ContractError, Result};
use crate::provider::{connect_http, ForkProvider};
use crate::signer::ImpersonatedSigner;

/// Gas money given to every impersonated account (100 ETH).
pub const GAS_ALLOWANCE: U256 = U256::from_limbs([0x6bc7_5e2d_6310_0000, 0x5, 0, 0]);

/// A forked chain reachable over JSON-RPC.
#[derive(Clone)]
pub struct Fork {
    provider: ForkProvider,
}

impl Fork {
    /// Connect to a fork endpoint.
    pub fn connect(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: connect_http(rpc_url)?,
        })
    }

    /// Returns the underlying provider for read-only contract calls.
    pub fn provider(&self) -> &ForkProvider {
        &self.provider
    }

    /// The chain id the fork reports.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ContractError::RpcConnection(format!("Failed to get chain id: {}", e)))
    }

    /// Unlock `address` and give it gas money.
    pub async fn impersonate(&self, address: Address) -> Result<ImpersonatedSigner> {
        self.provider
            .anvil_impersonate_account(address)
            .await
            .map_err(|e| fork_command("anvil_impersonateAccount", e))?;

        let balance = self
            .provider
            .get_balance(address)
            .await
            .map_err(|e| ContractError::Call(format!("Failed to get ETH balance: {}", e)))?;
        if balance < GAS_ALLOWANCE {
            self.provider
                .anvil_set_balance(address, GAS_ALLOWANCE)
                .await
                .map_err(|e| fork_command("anvil_setBalance", e))?;
        }

        tracing::debug!(%address, "impersonating account");
        Ok(ImpersonatedSigner::new(address, self.provider.clone()))
    }

    /// Advance the chain clock by `seconds`. The jump takes effect on the next block.
    pub async fn sleep(&self, seconds: u64) -> Result<()> {
        self.provider
            .anvil_increase_time(seconds)
            .await
            .map_err(|e| fork_command("anvil_increaseTime", e))?;
        tracing::debug!(seconds, "advanced clock");
        Ok(())
    }

    /// Mine `blocks` blocks.
    pub async fn mine(&self, blocks: u64) -> Result<()> {
        self.provider
            .anvil_mine(Some(blocks), None)
            .await
            .map_err(|e| fork_command("anvil_mine", e))
    }

    /// Advance the clock and mine one block so the jump is visible to views.
    pub async fn sleep_and_mine(&self, seconds: u64) -> Result<()> {
        self.sleep(seconds).await?;
        self.mine(1).await
    }
}

fn fork_command(command: &'static str, err: impl std::fmt::Display) -> ContractError {
    ContractError::ForkCommand {
        command,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_allowance_is_one_hundred_ether() {
        let one_ether = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(GAS_ALLOWANCE, one_ether * U256::from(100));
    }

    #[test]
    fn test_connect_rejects_bad_url() {
        assert!(matches!(
            Fork::connect("::not a url::"),
            Err(ContractError::RpcConnection(_))
        ));
    }
}
