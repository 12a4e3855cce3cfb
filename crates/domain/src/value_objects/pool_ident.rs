use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied pool identifier, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoolIdent {
    /// Numeric pool index.
    Index(u64),
    /// Pool index as text, e.g. taken from a URL or a token list.
    Text(String),
}

/// A textual pool id that does not denote a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pool id: {0:?}")]
pub struct InvalidPoolId(pub String);

impl PoolIdent {
    /// Resolves the identifier to the numeric pool index sent to the contract.
    ///
    /// Surrounding whitespace is ignored and an empty string resolves to 0.
    ///
    /// # Errors
    /// Returns [`InvalidPoolId`] if the text is not a non-negative integer.
    pub fn index(&self) -> Result<u64, InvalidPoolId> {
        match self {
            PoolIdent::Index(id) => Ok(*id),
            PoolIdent::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(0);
                }
                text.parse().map_err(|_| InvalidPoolId(text.to_string()))
            }
        }
    }
}

impl fmt::Display for PoolIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolIdent::Index(id) => write!(f, "{id}"),
            PoolIdent::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for PoolIdent {
    fn from(id: u64) -> Self {
        PoolIdent::Index(id)
    }
}

impl From<u32> for PoolIdent {
    fn from(id: u32) -> Self {
        PoolIdent::Index(u64::from(id))
    }
}

impl From<String> for PoolIdent {
    fn from(id: String) -> Self {
        PoolIdent::Text(id)
    }
}

impl From<&str> for PoolIdent {
    fn from(id: &str) -> Self {
        PoolIdent::Text(id.to_string())
    }
}
