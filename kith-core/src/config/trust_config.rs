use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust Score Aggregator configuration.
///
/// The *shape* of the formula is fixed (independently capped terms, outer
/// clamp to `[0, 100]`); these values tune it. Every field must be
/// non-negative or the monotonicity guarantee breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Score a member with no connections, groups, campaigns, or verified
    /// events receives exactly. Default: 10.0.
    pub base: f64,
    /// Points per accepted connection. Default: 2.0.
    pub per_connection: f64,
    /// Cap on the accepted-connection term. Default: 20.0.
    pub connection_bonus_cap: f64,
    /// Points per verified group joined. Default: 3.0.
    pub per_group: f64,
    /// Cap on the group term. Default: 15.0.
    pub group_bonus_cap: f64,
    /// Points per verified campaign joined. Default: 3.0.
    pub per_campaign: f64,
    /// Cap on the campaign term. Default: 15.0.
    pub campaign_bonus_cap: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            base: defaults::DEFAULT_TRUST_BASE,
            per_connection: defaults::DEFAULT_PER_CONNECTION,
            connection_bonus_cap: defaults::DEFAULT_CONNECTION_BONUS_CAP,
            per_group: defaults::DEFAULT_PER_GROUP,
            group_bonus_cap: defaults::DEFAULT_GROUP_BONUS_CAP,
            per_campaign: defaults::DEFAULT_PER_CAMPAIGN,
            campaign_bonus_cap: defaults::DEFAULT_CAMPAIGN_BONUS_CAP,
        }
    }
}
