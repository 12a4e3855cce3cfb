//! Read access to the Ref Finance exchange contract.
//!
//! - `rpc`: the view-function seam and the NEAR JSON-RPC client behind it
//! - `ref_finance`: paginated pool fetching and classification
//! - `error`: the error type shared by both

/// Error types.
pub mod error;
/// Pool fetching against the Ref Finance contract.
pub mod ref_finance;
/// Contract view calls over NEAR JSON-RPC.
pub mod rpc;

pub use error::FetchError;
pub use ref_finance::{FetcherConfig, RefPoolFetcher};
pub use rpc::{Finality, NearRpcClient, Network, RpcConfig, ViewFunction};

use async_trait::async_trait;
use ref_pools_domain::{Pool, PoolCollections, PoolIdent, StablePool};

/// Read-only access to the exchange's pools.
#[async_trait]
pub trait PoolFetcher {
    /// Reads rated pools by id, in input order.
    ///
    /// # Errors
    /// Fails with [`FetchError::Unnamed`] if any single read fails.
    async fn get_rated_pools(&self, ids: &[PoolIdent]) -> Result<Vec<StablePool>, FetchError>;

    /// Reads stable pools by id, in input order, deriving unit `rates`.
    ///
    /// # Errors
    /// Fails with [`FetchError::Unnamed`] if any single read fails.
    async fn get_stable_pools(&self, ids: &[PoolIdent]) -> Result<Vec<StablePool>, FetchError>;

    /// Reads one page of pools. `page` is 1-based.
    ///
    /// # Errors
    /// Returns [`FetchError::PageOutOfRange`] if the page's indices overflow
    /// u64, otherwise propagates the underlying read error.
    async fn get_ref_pools(&self, page: u64, per_page: u64) -> Result<Vec<Pool>, FetchError>;

    /// Reads every page concurrently and partitions the pools by kind.
    ///
    /// # Errors
    /// Propagates the first count or page read error; no partial results.
    async fn fetch_all_ref_pools(&self) -> Result<PoolCollections, FetchError>;

    /// Reads the number of pools registered on the exchange.
    ///
    /// # Errors
    /// Propagates the underlying read error.
    async fn get_total_pools(&self) -> Result<u64, FetchError>;

    /// Reads a single pool by id.
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidPoolId`] for a non-numeric id, otherwise
    /// propagates the underlying read error.
    async fn get_pool(&self, id: &PoolIdent) -> Result<Pool, FetchError>;
}
