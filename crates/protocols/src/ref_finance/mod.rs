//! Ref Finance exchange adapter.
//!
//! Reads pools through the contract's view methods:
//! - `get_number_of_pools` and `get_pools` for paginated listing
//! - `get_pool` for a single pool
//! - `get_stable_pool` and `get_rated_pool` for stable-swap pools by id

/// Pool fetcher.
pub mod fetcher;

pub use fetcher::{FetcherConfig, RefPoolFetcher};
