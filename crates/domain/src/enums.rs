use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pool kind tag as reported by the exchange contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolKind {
    /// Constant-product pool.
    SimplePool,
    /// Stable-swap pool without rate oracles.
    StableSwap,
    /// Stable-swap pool whose tokens carry exchange rates.
    RatedSwap,
}

impl PoolKind {
    /// Returns the tag string used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolKind::SimplePool => "SIMPLE_POOL",
            PoolKind::StableSwap => "STABLE_SWAP",
            PoolKind::RatedSwap => "RATED_SWAP",
        }
    }

    /// Parses an optional wire tag, yielding `None` for missing or unknown tags.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        tag.and_then(|t| t.parse().ok())
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is not one of the known pool kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pool kind: {0}")]
pub struct UnknownPoolKind(pub String);

impl FromStr for PoolKind {
    type Err = UnknownPoolKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIMPLE_POOL" => Ok(PoolKind::SimplePool),
            "STABLE_SWAP" => Ok(PoolKind::StableSwap),
            "RATED_SWAP" => Ok(PoolKind::RatedSwap),
            other => Err(UnknownPoolKind(other.to_string())),
        }
    }
}
