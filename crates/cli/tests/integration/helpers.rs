//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use alloy::primitives::{hex, U256};
use alloy::sol_types::{SolCall, SolValue};
use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Create a CLI command pointing to a mock node.
pub fn harness_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("harness").unwrap();
    cmd.env("FORK_RPC_URL", mock.uri());
    cmd
}

/// Create a CLI command without a mock node.
pub fn harness_cmd() -> Command {
    let mut cmd = Command::cargo_bin("harness").unwrap();
    cmd.env_remove("FORK_RPC_URL");
    cmd
}

/// Answers `eth_call`s by selector, ignoring target and arguments.
#[derive(Clone, Default)]
pub struct SelectorNode {
    returns: Vec<([u8; 4], Vec<u8>)>,
}

impl SelectorNode {
    pub fn on<C: SolCall>(mut self, ret: Vec<u8>) -> Self {
        self.returns.push((C::SELECTOR, ret));
        self
    }

    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(self)
            .mount(&server)
            .await;
        server
    }

    fn reply(&self, request: &Value) -> Value {
        let id = request["id"].clone();
        let result = match request["method"].as_str() {
            Some("eth_chainId") => Some(json!("0x2105")),
            Some("eth_call") => {
                let tx = &request["params"][0];
                let input = tx
                    .get("input")
                    .or_else(|| tx.get("data"))
                    .and_then(Value::as_str)
                    .and_then(|s| hex::decode(s).ok())
                    .unwrap_or_default();
                self.returns
                    .iter()
                    .find(|(selector, _)| input.starts_with(selector))
                    .map(|(_, ret)| json!(hex::encode_prefixed(ret)))
            }
            _ => None,
        };
        match result {
            Some(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
            None => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32601, "message": "not mocked"}
            }),
        }
    }
}

impl Respond for SelectorNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let reply = match body {
            Value::Array(batch) => Value::Array(batch.iter().map(|r| self.reply(r)).collect()),
            single => self.reply(&single),
        };
        ResponseTemplate::new(200).set_body_json(reply)
    }
}

pub fn word(value: u64) -> Vec<u8> {
    U256::from(value).abi_encode()
}

/// ABI-encoded vault record with the given debt ratio, activated and
/// reported at block time 100.
pub fn strategy_record(debt_ratio: u64) -> Vec<u8> {
    [
        U256::ZERO,
        U256::from(100u64),
        U256::from(debt_ratio),
        U256::ZERO,
        U256::MAX,
        U256::from(100u64),
        U256::from(60u64),
        U256::ZERO,
        U256::ZERO,
    ]
    .iter()
    .flat_map(|w| w.abi_encode())
    .collect()
}
