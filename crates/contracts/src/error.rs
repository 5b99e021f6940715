//! Error types for the contracts crate.

use std::fmt::Display;

use alloy_primitives::Address;
use thiserror::Error;

/// Errors that can occur when talking to the fork or the contracts on it.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// A fork control command (impersonation, clock, mining) failed.
    #[error("Fork command {command} failed: {message}")]
    ForkCommand {
        command: &'static str,
        message: String,
    },

    /// A read-only call failed.
    #[error("Call failed: {0}")]
    Call(String),

    /// Transaction failed before or after submission for a reason other than a revert.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The contract reverted the call.
    #[error("{signature} on {to} reverted: {reason}")]
    Reverted {
        to: Address,
        signature: &'static str,
        reason: String,
    },

    /// The receipt did not carry an expected event.
    #[error("Event {event} not emitted by {emitter}")]
    MissingEvent {
        event: &'static str,
        emitter: Address,
    },

    /// Return data could not be decoded.
    #[error("Failed to decode {signature} return data: {message}")]
    Decode {
        signature: &'static str,
        message: String,
    },

    /// Contract artifact could not be read or parsed.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Contract creation produced no address.
    #[error("Deployment of {0} failed")]
    DeploymentFailed(String),
}

impl ContractError {
    /// Classify an RPC failure for a call to `to`, separating reverts from transport problems.
    pub fn from_send(to: Address, signature: &'static str, err: impl Display) -> Self {
        let message = err.to_string();
        if message.contains("revert") {
            Self::Reverted {
                to,
                signature,
                reason: message,
            }
        } else {
            Self::TransactionFailed(format!("{}: {}", signature, message))
        }
    }

    /// Returns true if the contract itself rejected the call.
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted { .. })
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_rpc_connection() {
        let error = ContractError::RpcConnection("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "RPC connection failed: connection refused"
        );
    }

    #[test]
    fn test_error_display_fork_command() {
        let error = ContractError::ForkCommand {
            command: "anvil_mine",
            message: "method not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Fork command anvil_mine failed: method not found"
        );
    }

    #[test]
    fn test_from_send_classifies_revert() {
        let error = ContractError::from_send(
            Address::ZERO,
            "initialize()",
            "server returned an error response: execution reverted",
        );
        assert!(error.is_revert());
    }

    #[test]
    fn test_from_send_keeps_transport_errors() {
        let error = ContractError::from_send(Address::ZERO, "harvest()", "connection reset");
        assert!(!error.is_revert());
        assert_eq!(
            error.to_string(),
            "Transaction failed: harvest(): connection reset"
        );
    }

    #[test]
    fn test_error_display_missing_event() {
        let error = ContractError::MissingEvent {
            event: "Harvested",
            emitter: Address::repeat_byte(0x11),
        };
        assert!(error.to_string().starts_with("Event Harvested not emitted by 0x1111"));
    }
}
