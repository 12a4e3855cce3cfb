pub mod pool;
pub mod stable_pool;

// Re-export for easier access
pub use pool::{Pool, PoolCollections};
pub use stable_pool::StablePool;
