//! NEAR JSON-RPC client for contract view calls.

use super::ViewFunction;
use super::config::{Finality, RpcConfig};
use crate::error::FetchError;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Client issuing `call_function` queries against a single contract.
pub struct NearRpcClient {
    client: Client,
    config: RpcConfig,
}

impl NearRpcClient {
    /// Creates a new client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: RpcConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: RpcConfig) -> Self {
        Self { client, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }
}

#[async_trait]
impl ViewFunction for NearRpcClient {
    async fn view(&self, method_name: &str, args: Value) -> Result<Value, FetchError> {
        let request = RpcRequest::call_function(&self.config, method_name, &args)?;
        debug!(
            contract = %self.config.contract_id,
            method = method_name,
            args = %args,
            "Calling view function"
        );

        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await?
            .json::<RpcResponse>()
            .await?;

        response.into_result().inspect_err(|e| {
            warn!(method = method_name, error = %e, "View function failed");
        })
    }
}

/// JSON-RPC 2.0 `query` request.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'static str,
    params: CallFunctionParams<'a>,
}

#[derive(Debug, Serialize)]
struct CallFunctionParams<'a> {
    request_type: &'static str,
    finality: Finality,
    account_id: &'a str,
    method_name: &'a str,
    args_base64: String,
}

impl<'a> RpcRequest<'a> {
    fn call_function(
        config: &'a RpcConfig,
        method_name: &'a str,
        args: &Value,
    ) -> Result<Self, FetchError> {
        let args_base64 = STANDARD.encode(serde_json::to_vec(args)?);
        Ok(Self {
            jsonrpc: "2.0",
            id: "dontcare",
            method: "query",
            params: CallFunctionParams {
                request_type: "call_function",
                finality: config.finality,
                account_id: &config.contract_id,
                method_name,
                args_base64,
            },
        })
    }
}

/// JSON-RPC response envelope.
///
/// A view call can fail at two levels: the node rejects the request
/// (top-level `error`), or the contract panics (`result.error`).
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<CallResult>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct CallResult {
    /// UTF-8 JSON bytes returned by the contract.
    #[serde(default)]
    result: Option<Vec<u8>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, FetchError> {
        match self {
            Self {
                error: Some(error), ..
            } => {
                let message = match error.data {
                    Some(Value::String(data)) => format!("{}: {data}", error.message),
                    Some(Value::Null) | None => error.message,
                    Some(data) => format!("{}: {data}", error.message),
                };
                Err(FetchError::Rpc {
                    code: error.code,
                    message,
                })
            }
            Self {
                result: Some(CallResult {
                    error: Some(error), ..
                }),
                ..
            } => Err(FetchError::Contract(error)),
            Self {
                result: Some(CallResult {
                    result: Some(bytes),
                    ..
                }),
                ..
            } => Ok(serde_json::from_slice(&bytes)?),
            _ => Err(FetchError::InvalidResponse(
                "missing result and error".to_string(),
            )),
        }
    }
}
