//! Provider type definitions for fork clients.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The provider type used against the fork.
///
/// No wallet filler is installed: transactions carry an explicit `from` of an
/// account the fork has been told to impersonate, and the node signs them.
pub type ForkProvider = DynProvider;

/// Connect to a fork endpoint over HTTP.
pub fn connect_http(rpc_url: &str) -> Result<ForkProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rpc_url() {
        let result = connect_http("not a valid url");
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));
    }

    #[test]
    fn test_valid_rpc_url() {
        assert!(connect_http("http://localhost:8545").is_ok());
    }
}
