use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Points per mutual connection. Default: 5.0.
    pub mutual_weight: f64,
    /// Points per shared skill. Default: 2.0.
    pub skill_weight: f64,
    /// Points per shared interest. Default: 1.5.
    pub interest_weight: f64,
    /// Flat bonus when both members set the same location. Default: 3.0.
    pub location_weight: f64,
    /// Suggestions returned when the caller doesn't pass a limit. Default: 10.
    pub default_limit: usize,
    /// TTL of cached suggestion lists (seconds). Default: 300.
    pub cache_ttl_secs: u64,
    /// Max cached suggestion lists. Default: 10_000.
    pub cache_capacity: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            mutual_weight: defaults::DEFAULT_MUTUAL_WEIGHT,
            skill_weight: defaults::DEFAULT_SKILL_WEIGHT,
            interest_weight: defaults::DEFAULT_INTEREST_WEIGHT,
            location_weight: defaults::DEFAULT_LOCATION_WEIGHT,
            default_limit: defaults::DEFAULT_SUGGESTION_LIMIT,
            cache_ttl_secs: defaults::DEFAULT_SUGGESTION_CACHE_TTL_SECS,
            cache_capacity: defaults::DEFAULT_SUGGESTION_CACHE_CAPACITY,
        }
    }
}
