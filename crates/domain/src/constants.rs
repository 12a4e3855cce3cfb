/// Number of pools requested per `get_pools` page.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Decimal precision of stable-swap LP shares, used when deriving `rates`.
pub const STABLE_LP_TOKEN_DECIMALS: u32 = 18;
