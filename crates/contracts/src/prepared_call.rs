//! Prepared call types for deferred transaction execution.
//!
//! `PreparedCall` is a transaction from an impersonated account that has been
//! constructed but not yet sent. It can be:
//! - sent and mined via `.send()`
//! - dry-run with `.simulate()` to read the call's return value without
//!   changing chain state

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};
use crate::provider::ForkProvider;

/// A prepared transaction that can be inspected, simulated or executed.
///
/// # Example
///
/// ```rust,ignore
/// let call = IVelodromeStrategy::harvestCall {};
/// let receipt = gov.prepare(strategy, call).send().await?;
/// ```
pub struct PreparedCall<'a, C: SolCall> {
    from: Address,
    to: Address,
    call: C,
    value: U256,
    provider: &'a ForkProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call sent by `from`.
    pub fn new(from: Address, to: Address, call: C, provider: &'a ForkProvider) -> Self {
        Self {
            from,
            to,
            call,
            value: U256::ZERO,
            provider,
        }
    }

    /// Attach ETH to the call.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the sending account.
    pub fn from(&self) -> Address {
        self.from
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the value (ETH) to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    fn request(&self) -> TransactionRequest {
        TransactionRequest::default()
            .from(self.from)
            .to(self.to)
            .input(self.call.abi_encode().into())
            .value(self.value)
    }

    /// Executes the call with `eth_call` and decodes its return value.
    pub async fn simulate(&self) -> Result<C::Return> {
        let output = self
            .provider
            .call(self.request())
            .await
            .map_err(|e| ContractError::from_send(self.to, C::SIGNATURE, e))?;

        C::abi_decode_returns(&output).map_err(|e| ContractError::Decode {
            signature: C::SIGNATURE,
            message: e.to_string(),
        })
    }

    /// Sends the transaction and waits for the receipt.
    ///
    /// A mined transaction with a failed status is reported as a revert.
    pub async fn send(self) -> Result<TransactionReceipt> {
        let tx = self.request();

        tracing::debug!(from = %self.from, to = %self.to, call = C::SIGNATURE, "sending transaction");

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ContractError::from_send(self.to, C::SIGNATURE, e))?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        if !receipt.status() {
            return Err(ContractError::Reverted {
                to: self.to,
                signature: C::SIGNATURE,
                reason: format!("transaction {} mined with failed status", receipt.transaction_hash),
            });
        }

        Ok(receipt)
    }
}
