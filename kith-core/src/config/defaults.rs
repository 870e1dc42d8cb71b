//! Default values shared by the config blocks.

// Trust formula.
pub const DEFAULT_TRUST_BASE: f64 = 10.0;
pub const DEFAULT_PER_CONNECTION: f64 = 2.0;
pub const DEFAULT_CONNECTION_BONUS_CAP: f64 = 20.0;
pub const DEFAULT_PER_GROUP: f64 = 3.0;
pub const DEFAULT_GROUP_BONUS_CAP: f64 = 15.0;
pub const DEFAULT_PER_CAMPAIGN: f64 = 3.0;
pub const DEFAULT_CAMPAIGN_BONUS_CAP: f64 = 15.0;

// Suggestion scoring.
pub const DEFAULT_MUTUAL_WEIGHT: f64 = 5.0;
pub const DEFAULT_SKILL_WEIGHT: f64 = 2.0;
pub const DEFAULT_INTEREST_WEIGHT: f64 = 1.5;
pub const DEFAULT_LOCATION_WEIGHT: f64 = 3.0;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
pub const DEFAULT_SUGGESTION_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_SUGGESTION_CACHE_CAPACITY: u64 = 10_000;

// Change notification layer.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;
pub const DEFAULT_RECONNECT_DELAY_SECS: u64 = 5;
pub const DEFAULT_MAX_RECONNECT_ATTEMPTS: u32 = 0; // 0 = retry forever
pub const DEFAULT_TRUST_CACHE_CAPACITY: u64 = 100_000;
