pub mod pool_ident;

pub use pool_ident::{InvalidPoolId, PoolIdent};
