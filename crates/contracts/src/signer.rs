//! Impersonated accounts.
//!
//! An [`ImpersonatedSigner`] is the capability to send transactions as an
//! account the fork has unlocked. It is only handed out by
//! [`Fork::impersonate`](crate::fork::Fork::impersonate), so holding one
//! proves the unlock happened.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};
use crate::erc20::IERC20;
use crate::prepared_call::PreparedCall;
use crate::provider::ForkProvider;

/// An account unlocked on the fork.
#[derive(Clone)]
pub struct ImpersonatedSigner {
    address: Address,
    provider: ForkProvider,
}

impl std::fmt::Debug for ImpersonatedSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpersonatedSigner")
            .field("address", &self.address)
            .finish()
    }
}

impl ImpersonatedSigner {
    pub(crate) fn new(address: Address, provider: ForkProvider) -> Self {
        Self { address, provider }
    }

    /// The impersonated account's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Prepare a call to `to` sent from this account.
    pub fn prepare<C: SolCall>(&self, to: Address, call: C) -> PreparedCall<'_, C> {
        PreparedCall::new(self.address, to, call, &self.provider)
    }

    /// Prepare an ERC-20 transfer from this account.
    pub fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: alloy::primitives::U256,
    ) -> PreparedCall<'_, IERC20::transferCall> {
        self.prepare(token, IERC20::transferCall { to, amount })
    }

    /// Prepare an ERC-20 approval from this account.
    pub fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: alloy::primitives::U256,
    ) -> PreparedCall<'_, IERC20::approveCall> {
        self.prepare(token, IERC20::approveCall { spender, amount })
    }

    /// Deploy contract creation code from this account and return the new address.
    pub async fn deploy(&self, name: &str, code: Bytes) -> Result<Address> {
        let tx = TransactionRequest::default()
            .from(self.address)
            .with_deploy_code(code);

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to deploy {}: {}", name, e))
        })?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        if !receipt.status() {
            return Err(ContractError::DeploymentFailed(name.to_string()));
        }

        let address = receipt
            .contract_address
            .ok_or_else(|| ContractError::DeploymentFailed(name.to_string()))?;

        tracing::info!(contract = name, %address, deployer = %self.address, "deployed");
        Ok(address)
    }
}
