//! Contract view calls.
//!
//! [`ViewFunction`] is the seam between pool fetching and the transport.
//! [`NearRpcClient`] implements it over NEAR JSON-RPC.

/// Network and client configuration.
pub mod config;
/// NEAR JSON-RPC client.
pub mod near;

pub use config::{Finality, Network, RpcConfig, UnknownNetwork};
pub use near::NearRpcClient;

use crate::error::FetchError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Invokes read-only view methods on the exchange contract.
#[async_trait]
pub trait ViewFunction: Send + Sync {
    /// Calls `method_name` with JSON `args` and returns the parsed JSON result.
    async fn view(&self, method_name: &str, args: Value) -> Result<Value, FetchError>;
}

/// Calls a view method and deserializes its result into `T`.
///
/// # Errors
/// Returns the transport error, or [`FetchError::Decode`] if the result does
/// not match `T`.
pub async fn view_as<T, V>(view: &V, method_name: &str, args: Value) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    V: ViewFunction + ?Sized,
{
    let value = view.view(method_name, args).await?;
    Ok(serde_json::from_value(value)?)
}
