//! Domain model for Ref Finance liquidity pools.
//!
//! This crate provides the types shared by the fetcher and its callers:
//! - Raw contract view payloads
//! - Typed pools and the partitioned pool collections
//! - Pool kind tags and caller-supplied pool identifiers
//! - Fixed-precision number formatting

/// Exchange-wide constants.
pub mod constants;
/// Pool entities.
pub mod entities;
/// Enumerations.
pub mod enums;
/// Number formatting helpers.
pub mod math;
/// Value objects.
pub mod value_objects;
/// Raw contract view payloads.
pub mod views;

pub use constants::{DEFAULT_PAGE_LIMIT, STABLE_LP_TOKEN_DECIMALS};
pub use entities::{Pool, PoolCollections, StablePool};
pub use enums::PoolKind;
pub use value_objects::pool_ident::{InvalidPoolId, PoolIdent};
pub use views::{PoolRpcView, StablePoolView};
