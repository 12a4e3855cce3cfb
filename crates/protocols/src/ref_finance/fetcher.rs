//! Paginated pool fetcher for the Ref Finance exchange.

use crate::PoolFetcher;
use crate::error::FetchError;
use crate::rpc::{ViewFunction, view_as};
use async_trait::async_trait;
use futures::future::try_join_all;
use ref_pools_domain::{
    DEFAULT_PAGE_LIMIT, Pool, PoolCollections, PoolIdent, PoolRpcView, STABLE_LP_TOKEN_DECIMALS,
    StablePool, StablePoolView,
};
use serde_json::json;
use tracing::{debug, info, warn};

/// Configuration for the pool fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Pools requested per `get_pools` page.
    pub page_limit: u64,
    /// Precision of the unit rate derived for stable pools.
    pub stable_lp_token_decimals: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            stable_lp_token_decimals: STABLE_LP_TOKEN_DECIMALS,
        }
    }
}

/// Stable-swap views readable by pool id.
#[derive(Debug, Clone, Copy)]
enum ByIdView {
    Stable,
    Rated,
}

impl ByIdView {
    fn method_name(self) -> &'static str {
        match self {
            ByIdView::Stable => "get_stable_pool",
            ByIdView::Rated => "get_rated_pool",
        }
    }
}

/// Reads pools from the exchange contract through a [`ViewFunction`].
pub struct RefPoolFetcher<V> {
    view: V,
    config: FetcherConfig,
}

impl<V: ViewFunction> RefPoolFetcher<V> {
    /// Creates a fetcher with the default configuration.
    pub fn new(view: V) -> Self {
        Self::with_config(view, FetcherConfig::default())
    }

    /// Creates a fetcher with a custom configuration.
    pub fn with_config(view: V, config: FetcherConfig) -> Self {
        Self { view, config }
    }

    /// Returns the fetcher configuration.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Reads the first page using the configured page size.
    ///
    /// # Errors
    /// Propagates the underlying read error.
    pub async fn get_ref_pools_default(&self) -> Result<Vec<Pool>, FetchError> {
        self.get_ref_pools(1, self.page_limit()).await
    }

    /// Configured page size, at least 1.
    fn page_limit(&self) -> u64 {
        self.config.page_limit.max(1)
    }

    /// Reads stable-swap pools by id concurrently, failing as a whole.
    async fn fetch_by_ids(
        &self,
        kind: ByIdView,
        ids: &[PoolIdent],
    ) -> Result<Vec<StablePool>, FetchError> {
        let method = kind.method_name();
        let reads = ids.iter().map(|ident| async move {
            let id = ident.index()?;
            debug!(method, pool_id = id, "Reading pool by id");
            let view: StablePoolView = view_as(&self.view, method, json!({ "pool_id": id })).await?;
            Ok::<_, FetchError>(match kind {
                ByIdView::Stable => {
                    StablePool::stable(view, id, self.config.stable_lp_token_decimals)
                }
                ByIdView::Rated => StablePool::rated(view, id),
            })
        });

        try_join_all(reads).await.map_err(|e| {
            warn!(method, count = ids.len(), error = %e, "Batch pool read failed");
            FetchError::unnamed(e)
        })
    }
}

#[async_trait]
impl<V: ViewFunction> PoolFetcher for RefPoolFetcher<V> {
    async fn get_rated_pools(&self, ids: &[PoolIdent]) -> Result<Vec<StablePool>, FetchError> {
        self.fetch_by_ids(ByIdView::Rated, ids).await
    }

    async fn get_stable_pools(&self, ids: &[PoolIdent]) -> Result<Vec<StablePool>, FetchError> {
        self.fetch_by_ids(ByIdView::Stable, ids).await
    }

    async fn get_ref_pools(&self, page: u64, per_page: u64) -> Result<Vec<Pool>, FetchError> {
        let out_of_range = || FetchError::PageOutOfRange { page, per_page };
        let from_index = page
            .saturating_sub(1)
            .checked_mul(per_page)
            .ok_or_else(out_of_range)?;
        debug!(page, from_index, limit = per_page, "Reading pool page");

        let page_views: Vec<PoolRpcView> = view_as(
            &self.view,
            "get_pools",
            json!({ "from_index": from_index, "limit": per_page }),
        )
        .await?;

        page_views
            .into_iter()
            .enumerate()
            .map(|(k, raw)| {
                let id = from_index
                    .checked_add(k as u64)
                    .ok_or_else(out_of_range)?;
                Ok::<_, FetchError>(Pool::from_view(raw, id))
            })
            .collect()
    }

    async fn fetch_all_ref_pools(&self) -> Result<PoolCollections, FetchError> {
        let total = self.get_total_pools().await?;
        let limit = self.page_limit();
        let pages = total.div_ceil(limit);
        info!(total, pages, limit, "Fetching all pools");

        let reads = (1..=pages).map(|page| self.get_ref_pools(page, limit));
        let pools = try_join_all(reads).await?.into_iter().flatten();

        let collections = PoolCollections::partition(pools);
        info!(
            simple = collections.simple_pools.len(),
            stable = collections.un_rated_pools.len(),
            rated = collections.rated_pools.len(),
            "Fetched all pools"
        );
        Ok(collections)
    }

    async fn get_total_pools(&self) -> Result<u64, FetchError> {
        view_as(&self.view, "get_number_of_pools", json!({})).await
    }

    async fn get_pool(&self, id: &PoolIdent) -> Result<Pool, FetchError> {
        let id = id.index()?;
        let view: PoolRpcView = view_as(&self.view, "get_pool", json!({ "pool_id": id })).await?;
        Ok(Pool::from_view(view, id))
    }
}
