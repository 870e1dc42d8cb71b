//! Capped-term trust formula.
//!
//! ```text
//! score = base
//!       + min(connection_bonus_cap, accepted_count * per_connection)
//!       + min(group_bonus_cap,      group_count    * per_group)
//!       + min(campaign_bonus_cap,   campaign_count * per_campaign)
//!       + sum(effective_weight(e) for verified activity events e)
//! score = clamp(score, 0, 100)
//! ```
//!
//! Each capped term is clamped independently before summation, so no single
//! signal can dominate; the outer clamp bounds the result regardless of
//! input volume. With non-negative config values every term is monotonic
//! non-decreasing in its input, and so is the whole score.

use std::sync::Arc;

use tracing::{debug, instrument};

use kith_core::config::TrustConfig;
use kith_core::errors::KithResult;
use kith_core::models::{ActivityKind, MemberId, TrustBreakdown};
use kith_core::traits::{IActivityFeed, IConnectionLedger};

/// Computes trust scores from ledger statistics and the activity feed.
pub struct TrustAggregator {
    ledger: Arc<dyn IConnectionLedger>,
    activity: Arc<dyn IActivityFeed>,
    config: TrustConfig,
}

impl TrustAggregator {
    /// Create an aggregator with the given config.
    pub fn new(
        ledger: Arc<dyn IConnectionLedger>,
        activity: Arc<dyn IActivityFeed>,
        config: TrustConfig,
    ) -> Self {
        Self {
            ledger,
            activity,
            config,
        }
    }

    /// Get the config.
    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// The bounded integer trust score for a member.
    ///
    /// A member with no connections, no participation, and no verified
    /// events scores exactly `config.base` (clamped and rounded).
    pub fn score(&self, member: &MemberId) -> KithResult<u8> {
        self.breakdown(member).map(|b| b.final_score)
    }

    /// Compute the score with a full per-term breakdown for diagnostics.
    #[instrument(skip(self))]
    pub fn breakdown(&self, member: &MemberId) -> KithResult<TrustBreakdown> {
        let accepted = self.ledger.accepted_count(member)? as f64;
        let groups = self
            .activity
            .verified_kind_count(member, ActivityKind::GroupJoined)? as f64;
        let campaigns = self
            .activity
            .verified_kind_count(member, ActivityKind::CampaignJoined)? as f64;

        let activity_sum: f64 = self
            .activity
            .verified_events(member)?
            .iter()
            .filter(|e| e.kind.feeds_activity_sum())
            .map(|e| e.effective_weight())
            .sum();

        let connection_bonus =
            (accepted * self.config.per_connection).min(self.config.connection_bonus_cap);
        let group_bonus = (groups * self.config.per_group).min(self.config.group_bonus_cap);
        let campaign_bonus =
            (campaigns * self.config.per_campaign).min(self.config.campaign_bonus_cap);

        let raw =
            self.config.base + connection_bonus + group_bonus + campaign_bonus + activity_sum;
        let final_score = raw.clamp(0.0, 100.0).round() as u8;

        debug!(%member, raw, final_score, "computed trust score");

        Ok(TrustBreakdown {
            base: self.config.base,
            connection_bonus,
            group_bonus,
            campaign_bonus,
            activity_sum,
            final_score,
        })
    }
}
