use serde::{Deserialize, Serialize};

use super::defaults;

/// Change Notification Layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity. A subscriber further behind than this
    /// observes a lag signal and must refresh. Default: 1024.
    pub channel_capacity: usize,
    /// Delay between resubscription attempts (seconds). Default: 5.
    pub reconnect_delay_secs: u64,
    /// Maximum resubscription attempts; 0 retries forever. Default: 0.
    pub max_reconnect_attempts: u32,
    /// Max entries in the trust-score cache invalidated by change events.
    /// Default: 100_000.
    pub trust_cache_capacity: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: defaults::DEFAULT_CHANNEL_CAPACITY,
            reconnect_delay_secs: defaults::DEFAULT_RECONNECT_DELAY_SECS,
            max_reconnect_attempts: defaults::DEFAULT_MAX_RECONNECT_ATTEMPTS,
            trust_cache_capacity: defaults::DEFAULT_TRUST_CACHE_CAPACITY,
        }
    }
}
