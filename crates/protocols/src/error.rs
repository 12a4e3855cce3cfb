use ref_pools_domain::InvalidPoolId;

/// Errors raised while reading pools from the exchange.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP transport failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message, including node-provided details.
        message: String,
    },

    /// The view call panicked inside the contract.
    #[error("Contract view failed: {0}")]
    Contract(String),

    /// A payload did not have the expected shape.
    #[error("Failed to decode view result: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response envelope carried neither a result nor an error.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// The page window does not fit in the u64 index space.
    #[error("Page {page} with {per_page} pools per page is out of range")]
    PageOutOfRange {
        /// Requested 1-based page.
        page: u64,
        /// Requested page size.
        per_page: u64,
    },

    /// A textual pool id is not numeric.
    #[error(transparent)]
    InvalidPoolId(#[from] InvalidPoolId),

    /// Generic failure surfaced by batched reads; the cause is kept as source.
    #[error("Operation failed")]
    Unnamed {
        /// The first failure observed.
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    /// Wraps an error into the generic [`FetchError::Unnamed`] variant.
    #[must_use]
    pub fn unnamed(source: FetchError) -> Self {
        FetchError::Unnamed {
            source: Box::new(source),
        }
    }
}
