//! JSON-RPC mock for harness tests that need a node but no chain state.
//!
//! [`RpcMock`] answers node methods from a table and `eth_call`s by
//! calldata, so provisioning stages and status reads can run against
//! canned contract state. With [`RpcMock::mining`] it also accepts
//! transactions and hands back one canned receipt for all of them.

use std::collections::HashMap;

use alloy::primitives::{hex, Address, Bytes, LogData, B256};
use alloy::sol_types::SolCall;
use serde_json::{json, Value};
use strategy_harness::Fork;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Which `eth_call`s a canned return value answers.
#[derive(Clone)]
enum CallKey {
    /// Exact target and calldata.
    Exact(Address, Bytes),
    /// Any call with this selector to this target.
    Selector(Address, [u8; 4]),
}

/// Hash returned for every transaction the mock accepts.
pub const TX_HASH: B256 = B256::repeat_byte(0x7a);

#[derive(Clone, Default)]
pub struct RpcMock {
    methods: HashMap<String, Value>,
    errors: HashMap<String, String>,
    calls: Vec<(CallKey, Bytes)>,
}

impl RpcMock {
    /// A node on `chain_id` that accepts impersonation and balance top-ups.
    pub fn anvil(chain_id: u64) -> Self {
        Self::default()
            .method("eth_chainId", json!(format!("0x{chain_id:x}")))
            .method("anvil_impersonateAccount", Value::Null)
            .method("anvil_setBalance", Value::Null)
            .method("eth_getBalance", json!("0x0"))
    }

    pub fn method(mut self, name: &str, result: Value) -> Self {
        self.methods.insert(name.to_string(), result);
        self
    }

    /// Answer `name` with a JSON-RPC error carrying `message`.
    pub fn fail(mut self, name: &str, message: &str) -> Self {
        self.errors.insert(name.to_string(), message.to_string());
        self
    }

    /// Accept transactions and advance time on request. Every receipt has
    /// `status` and carries `logs`.
    pub fn mining(self, status: bool, logs: &[(Address, LogData)]) -> Self {
        self.method("eth_estimateGas", json!("0x30d40"))
            .method("eth_getTransactionCount", json!("0x0"))
            .method("eth_gasPrice", json!("0x3b9aca00"))
            .method(
                "eth_feeHistory",
                json!({
                    "oldestBlock": "0x1",
                    "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
                    "gasUsedRatio": [0.5],
                    "reward": [["0x1"]]
                }),
            )
            .method("eth_blockNumber", json!("0x1"))
            .method("eth_getBlockByNumber", Value::Null)
            .method("eth_sendTransaction", json!(TX_HASH))
            .method("eth_getTransactionReceipt", receipt(status, logs))
            .method("evm_increaseTime", json!(1))
            .method("anvil_mine", Value::Null)
    }

    /// Answer `call` sent to `to` with the ABI-encoded `ret`.
    pub fn on_call<C: SolCall>(mut self, to: Address, call: C, ret: Vec<u8>) -> Self {
        self.calls
            .push((CallKey::Exact(to, call.abi_encode().into()), ret.into()));
        self
    }

    /// Answer every call with `C`'s selector sent to `to`.
    pub fn on_selector<C: SolCall>(mut self, to: Address, ret: Vec<u8>) -> Self {
        self.calls.push((CallKey::Selector(to, C::SELECTOR), ret.into()));
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

    fn call_result(&self, tx: &Value) -> Option<Value> {
        let input = tx.get("input").or_else(|| tx.get("data"))?.as_str()?;
        let input = Bytes::from(hex::decode(input).ok()?);
        let to: Address = tx.get("to")?.as_str()?.parse().ok()?;
        let selector = input.get(..4)?;

        let exact = self.calls.iter().find(|(key, _)| {
            matches!(key, CallKey::Exact(target, data) if *target == to && *data == input)
        });
        let by_selector = || {
            self.calls.iter().find(|(key, _)| {
                matches!(key, CallKey::Selector(target, sel) if *target == to && sel[..] == *selector)
            })
        };
        exact
            .or_else(by_selector)
            .map(|(_, ret)| json!(hex::encode_prefixed(ret)))
    }

    fn reply(&self, request: &Value) -> Value {
        let id = request["id"].clone();
        let name = request["method"].as_str().unwrap_or_default();
        if let Some(message) = self.errors.get(name) {
            return json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": 3, "message": message}
            });
        }
        let result = if name == "eth_call" {
            self.call_result(&request["params"][0])
        } else {
            self.methods.get(name).cloned()
        };
        match result {
            Some(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
            None => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32601, "message": format!("not mocked: {name}")}
            }),
        }
    }
}

impl Respond for RpcMock {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let reply = match body {
            Value::Array(batch) => Value::Array(batch.iter().map(|r| self.reply(r)).collect()),
            single => self.reply(&single),
        };
        ResponseTemplate::new(200).set_body_json(reply)
    }
}

/// A fork handle pointed at the mock server.
pub fn fork_for(server: &MockServer) -> Fork {
    Fork::connect(&server.uri()).unwrap()
}

fn receipt(status: bool, logs: &[(Address, LogData)]) -> Value {
    let block_hash = B256::repeat_byte(0x0b);
    let logs: Vec<Value> = logs
        .iter()
        .enumerate()
        .map(|(index, (address, data))| {
            json!({
                "address": address,
                "topics": data.topics(),
                "data": hex::encode_prefixed(&data.data),
                "blockHash": block_hash,
                "blockNumber": "0x1",
                "transactionHash": TX_HASH,
                "transactionIndex": "0x0",
                "logIndex": format!("0x{index:x}"),
                "removed": false
            })
        })
        .collect();
    json!({
        "type": "0x2",
        "status": if status { "0x1" } else { "0x0" },
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "blockHash": block_hash,
        "blockNumber": "0x1",
        "from": Address::ZERO,
        "to": null,
        "contractAddress": null,
        "cumulativeGasUsed": "0x30d40",
        "gasUsed": "0x30d40",
        "effectiveGasPrice": "0x3b9aca00",
        "logs": logs,
        "logsBloom": hex::encode_prefixed([0u8; 256])
    })
}

/// Every JSON-RPC request the server received, batches flattened.
pub async fn received(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .flat_map(|body| match body {
            Value::Array(batch) => batch,
            single => vec![single],
        })
        .collect()
}

/// A transaction the mock accepted through `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransaction {
    pub from: Address,
    pub to: Address,
    pub input: Bytes,
}

pub fn sent_transactions(requests: &[Value]) -> Vec<SentTransaction> {
    requests
        .iter()
        .filter(|r| r["method"] == "eth_sendTransaction")
        .map(|r| {
            let tx = &r["params"][0];
            let input = tx
                .get("input")
                .or_else(|| tx.get("data"))
                .and_then(Value::as_str)
                .unwrap();
            SentTransaction {
                from: tx["from"].as_str().unwrap().parse().unwrap(),
                to: tx["to"].as_str().unwrap().parse().unwrap(),
                input: hex::decode(input).unwrap().into(),
            }
        })
        .collect()
}

/// Block counts passed to `anvil_mine`, in order.
pub fn mined_blocks(requests: &[Value]) -> Vec<u64> {
    requests
        .iter()
        .filter(|r| r["method"] == "anvil_mine")
        .map(|r| match &r["params"][0] {
            Value::String(hex) => u64::from_str_radix(hex.trim_start_matches("0x"), 16).unwrap(),
            other => other.as_u64().unwrap(),
        })
        .collect()
}
