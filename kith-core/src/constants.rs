/// Kith system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the trust score range.
pub const TRUST_SCORE_MIN: u8 = 0;

/// Upper bound of the trust score range.
pub const TRUST_SCORE_MAX: u8 = 100;

/// Maximum number of suggestions a single call may return.
pub const MAX_SUGGESTION_LIMIT: usize = 100;

/// Maximum members loaded into one suggestion candidate pool.
pub const MAX_CANDIDATE_POOL: usize = 10_000;
