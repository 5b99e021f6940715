//! Expected-revert assertions.

use alloy::sol_types::SolCall;
use strategy_harness_contracts::PreparedCall;

use crate::error::{HarnessError, Result};

/// Send `call` and require that the contract rejects it.
///
/// A revert is the success case. Any other failure propagates unchanged;
/// a call that goes through is [`HarnessError::UnexpectedSuccess`].
pub async fn expect_revert<C: SolCall>(call: PreparedCall<'_, C>) -> Result<()> {
    let to = call.to();
    match call.send().await {
        Ok(_) => Err(HarnessError::UnexpectedSuccess {
            to,
            signature: C::SIGNATURE,
        }),
        Err(err) if err.is_revert() => {
            tracing::debug!(%to, call = C::SIGNATURE, error = %err, "reverted as expected");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
