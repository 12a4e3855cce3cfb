use crate::enums::PoolKind;
use crate::views::PoolRpcView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A pool read through the paginated `get_pools` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Global pool index on the exchange.
    pub id: u64,
    #[serde(rename = "pool_kind")]
    pub pool_kind: Option<PoolKind>,
    pub token_ids: Vec<String>,
    /// Reserve per token id.
    pub supplies: BTreeMap<String, String>,
    /// Fee in basis points.
    pub fee: u32,
    pub share_supply: String,
    pub amp: u64,
    pub tvl: Option<f64>,
    #[serde(rename = "token0_ref_price")]
    pub token0_ref_price: Option<String>,
}

impl Pool {
    /// Builds a typed pool from a raw view, assigning it the given index.
    ///
    /// Any `id` carried by the view is ignored. Unknown kind tags leave
    /// `pool_kind` empty.
    #[must_use]
    pub fn from_view(view: PoolRpcView, id: u64) -> Self {
        let pool_kind = PoolKind::from_tag(view.pool_kind.as_deref());
        if pool_kind.is_none() {
            debug!(pool_id = id, tag = ?view.pool_kind, "Pool has no recognized kind");
        }

        let supplies = view
            .token_account_ids
            .iter()
            .cloned()
            .zip(view.amounts)
            .collect();

        Self {
            id,
            pool_kind,
            token_ids: view.token_account_ids,
            supplies,
            fee: view.total_fee,
            share_supply: view.shares_total_supply,
            amp: view.amp,
            tvl: view.tvl,
            token0_ref_price: view.token0_ref_price,
        }
    }
}

/// Pools partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolCollections {
    pub simple_pools: Vec<Pool>,
    pub un_rated_pools: Vec<Pool>,
    pub rated_pools: Vec<Pool>,
}

impl PoolCollections {
    /// Splits pools into buckets by kind, keeping relative order.
    ///
    /// Pools without a recognized kind land in no bucket.
    pub fn partition(pools: impl IntoIterator<Item = Pool>) -> Self {
        let mut collections = Self::default();
        let mut untagged = 0usize;

        for pool in pools {
            match pool.pool_kind {
                Some(PoolKind::SimplePool) => collections.simple_pools.push(pool),
                Some(PoolKind::StableSwap) => collections.un_rated_pools.push(pool),
                Some(PoolKind::RatedSwap) => collections.rated_pools.push(pool),
                None => untagged += 1,
            }
        }

        if untagged > 0 {
            debug!(count = untagged, "Dropped pools without a recognized kind");
        }
        collections
    }

    /// Total number of pools across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.simple_pools.len() + self.un_rated_pools.len() + self.rated_pools.len()
    }

    /// Returns true if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
