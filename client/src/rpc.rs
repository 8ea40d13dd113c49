//! HTTP gateway implementation.
//!
//! Speaks a single-envelope JSON protocol with the node: every request is a
//! POST with an `action` field, every response carries either a `result`
//! object or an `error` string.

use serde::Deserialize;
use std::time::Duration;

use stakeview_types::{ContractValue, TokenAmount, TxHash};

use crate::error::ClientError;
use crate::gateway::{ContractGateway, ContractId, EventKind, LogEntry};

/// JSON-over-HTTP client for a node exposing the contract gateway actions.
///
/// Wraps `reqwest::Client` with the node's base URL and provides the typed
/// [`ContractGateway`] surface.
#[derive(Clone)]
pub struct RpcGateway {
    http: reqwest::Client,
    node_url: String,
}

impl RpcGateway {
    /// Create a new gateway targeting the given base URL
    /// (e.g. `http://127.0.0.1:8545`).
    pub fn new(node_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Request(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            node_url: node_url.into(),
        })
    }

    /// The configured node URL.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Send an action request and return the `result` field.
    async fn call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| ClientError::Request("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        let response = self
            .http
            .post(&self.node_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Request(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("invalid JSON: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            return Err(ClientError::Node(err.to_string()));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }
}

impl ContractGateway for RpcGateway {
    async fn read_value(
        &self,
        contract: ContractId,
        function: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue, ClientError> {
        let result = self
            .call(
                "contract_read",
                serde_json::json!({
                    "contract": contract.name(),
                    "function": function,
                    "args": args,
                }),
            )
            .await?;

        let resp: ReadResult = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid read response: {e}")))?;
        Ok(resp.value)
    }

    async fn balance_of(&self, contract: ContractId) -> Result<ContractValue, ClientError> {
        let result = self
            .call(
                "contract_balance",
                serde_json::json!({ "contract": contract.name() }),
            )
            .await?;

        let resp: BalanceResult = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid balance response: {e}")))?;
        Ok(resp.balance)
    }

    async fn submit(
        &self,
        contract: ContractId,
        function: &str,
        args: &[ContractValue],
        value: Option<TokenAmount>,
    ) -> Result<TxHash, ClientError> {
        let result = self
            .call(
                "contract_send",
                serde_json::json!({
                    "contract": contract.name(),
                    "function": function,
                    "args": args,
                    "value": value.map(|v| v.wei().to_string()),
                }),
            )
            .await?;

        let resp: SubmitResult = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid send response: {e}")))?;
        if !resp.accepted {
            return Err(ClientError::Rejected(
                resp.detail.unwrap_or_else(|| "no detail".to_string()),
            ));
        }
        Ok(TxHash::new(resp.transaction_hash))
    }

    async fn event_history(
        &self,
        contract: ContractId,
        event: EventKind,
    ) -> Result<Vec<LogEntry>, ClientError> {
        let result = self
            .call(
                "event_history",
                serde_json::json!({
                    "contract": contract.name(),
                    "event": event.event_name(),
                }),
            )
            .await?;

        let resp: HistoryResult = serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid history response: {e}")))?;
        Ok(resp.entries)
    }

    async fn latest_block(&self) -> Result<u64, ClientError> {
        let result = self.call("block_number", serde_json::json!({})).await?;

        let resp: BlockNumberResult = serde_json::from_value(result).map_err(|e| {
            ClientError::InvalidResponse(format!("invalid block_number response: {e}"))
        })?;
        Ok(resp.block_number)
    }
}

// ── Response DTOs ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct ReadResult {
    value: ContractValue,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceResult {
    balance: ContractValue,
}

#[derive(Debug, Clone, Deserialize)]
struct SubmitResult {
    transaction_hash: String,
    accepted: bool,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct HistoryResult {
    #[serde(default)]
    entries: Vec<LogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct BlockNumberResult {
    block_number: u64,
}
