//! Compiled contract artifacts.
//!
//! The harness does not compile Solidity or Vyper; it deploys creation code
//! from the JSON artifacts a build tool writes. Two layouts are accepted:
//! Foundry (`{"bytecode": {"object": "0x.."}}`) and Brownie/Hardhat
//! (`{"bytecode": "0x.."}`).

use std::path::Path;

use alloy::primitives::Bytes;
use serde_json::Value;

use crate::error::{ContractError, Result};

/// Creation code for a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    name: String,
    bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON text.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let name = name.into();
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ContractError::Artifact(format!("{}: invalid JSON: {}", name, e)))?;

        let raw = match value.get("bytecode") {
            Some(Value::String(code)) => code.as_str(),
            Some(Value::Object(obj)) => obj
                .get("object")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ContractError::Artifact(format!("{}: bytecode.object missing", name))
                })?,
            _ => {
                return Err(ContractError::Artifact(format!(
                    "{}: no bytecode field",
                    name
                )))
            }
        };

        if raw.contains("__") {
            return Err(ContractError::Artifact(format!(
                "{}: bytecode has unlinked library placeholders",
                name
            )));
        }

        let bytecode: Bytes = raw
            .parse()
            .map_err(|e| ContractError::Artifact(format!("{}: invalid hex: {}", name, e)))?;

        if bytecode.is_empty() {
            return Err(ContractError::Artifact(format!(
                "{}: empty bytecode (interface or abstract contract?)",
                name
            )));
        }

        Ok(Self { name, bytecode })
    }

    /// Read an artifact file. The contract name is taken from the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ContractError::Artifact(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("contract")
            .to_string();
        Self::from_json(name, &json)
    }

    /// Contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation code without constructor arguments.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Creation code followed by ABI-encoded constructor arguments.
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foundry_layout() {
        let json = r#"{"abi": [], "bytecode": {"object": "0x6080604052", "linkReferences": {}}}"#;
        let artifact = ContractArtifact::from_json("Vault", json).unwrap();
        assert_eq!(artifact.name(), "Vault");
        assert_eq!(artifact.bytecode().as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_brownie_layout() {
        let json = r#"{"contractName": "Vault", "bytecode": "0x6080"}"#;
        let artifact = ContractArtifact::from_json("Vault", json).unwrap();
        assert_eq!(artifact.bytecode().len(), 2);
    }

    #[test]
    fn test_missing_bytecode() {
        let result = ContractArtifact::from_json("Vault", r#"{"abi": []}"#);
        assert!(matches!(result, Err(ContractError::Artifact(_))));
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let result = ContractArtifact::from_json("IVault", r#"{"bytecode": "0x"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("empty bytecode"));
    }

    #[test]
    fn test_unlinked_library_rejected() {
        let json = r#"{"bytecode": "0x6080__$abcdef$__6080"}"#;
        let err = ContractArtifact::from_json("Strategy", json).unwrap_err();
        assert!(err.to_string().contains("unlinked"));
    }

    #[test]
    fn test_deploy_code_appends_constructor_args() {
        let artifact = ContractArtifact::from_json("S", r#"{"bytecode": "0x60"}"#).unwrap();
        let code = artifact.deploy_code(&[0xaa, 0xbb]);
        assert_eq!(code.as_ref(), &[0x60, 0xaa, 0xbb]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ContractArtifact::load("/nonexistent/Vault.json");
        assert!(matches!(result, Err(ContractError::Artifact(_))));
    }
}
