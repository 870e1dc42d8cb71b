//! Trust score diagnostics.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-term breakdown of one trust score computation.
///
/// Every capped term is already clamped; `final_score` is the outer
/// `[0, 100]` clamp of the sum, rounded to an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustBreakdown {
    pub base: f64,
    /// `min(connection_bonus_cap, accepted_count * per_connection)`.
    pub connection_bonus: f64,
    /// `min(group_bonus_cap, group_count * per_group)`.
    pub group_bonus: f64,
    /// `min(campaign_bonus_cap, campaign_count * per_campaign)`.
    pub campaign_bonus: f64,
    /// Sum of effective weights over verified activity events.
    pub activity_sum: f64,
    /// The bounded integer score shown in the product.
    pub final_score: u8,
}
