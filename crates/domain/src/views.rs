//! Payloads returned by the exchange contract's view methods.
//!
//! Amounts are kept as decimal strings exactly as the contract encodes them
//! (`U128` values serialized as JSON strings).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a `get_pools` page, or the result of `get_pool`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolRpcView {
    /// Id echoed by some indexers; ignored in favor of the page position.
    #[serde(default)]
    pub id: Option<u64>,
    /// Wire tag such as `SIMPLE_POOL`; absent on some legacy responses.
    #[serde(default)]
    pub pool_kind: Option<String>,
    pub token_account_ids: Vec<String>,
    pub amounts: Vec<String>,
    /// Fee in basis points.
    pub total_fee: u32,
    pub shares_total_supply: String,
    /// Amplification factor; zero for simple pools.
    #[serde(default)]
    pub amp: u64,
    #[serde(default)]
    pub tvl: Option<f64>,
    #[serde(default)]
    pub token0_ref_price: Option<String>,
}

/// Result of `get_stable_pool` and `get_rated_pool`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StablePoolView {
    #[serde(default)]
    pub pool_kind: Option<String>,
    pub token_account_ids: Vec<String>,
    pub decimals: Vec<u8>,
    /// Raw reserves in each token's own precision.
    pub amounts: Vec<String>,
    /// Reserves normalized to the pool's comparable precision.
    pub c_amounts: Vec<String>,
    pub total_fee: u32,
    pub shares_total_supply: String,
    pub amp: u64,
    /// Token rates; only rated pools report them.
    #[serde(default)]
    pub rates: Vec<String>,
    /// Fields not modelled above, kept as returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
