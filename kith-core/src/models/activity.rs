//! Activity events emitted by external subsystems (feed, groups, campaigns,
//! verification) and consumed by the Trust Score Aggregator.
//!
//! `ActivityKind` is a closed enum with a fixed weight table — adding a new
//! kind is an explicit, reviewed change, never a stringly-typed one.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use kith_core::models::{ActivityEvent, ActivityKind, MemberId};
//!
//! let event = ActivityEvent::new(
//!     MemberId::from("amara"),
//!     ActivityKind::HelpCompleted,
//!     1.0,
//!     Utc::now(),
//!     true,
//! );
//! assert!(event.verified);
//! // Re-ingesting the same event produces the same hash, so at-least-once
//! // delivery from upstream collapses to one stored row.
//! let replay = ActivityEvent::new(
//!     event.member_id.clone(),
//!     event.kind,
//!     event.weight,
//!     event.occurred_at,
//!     true,
//! );
//! assert_eq!(event.event_hash, replay.event_hash);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::member::MemberId;

/// The closed set of activity kinds that may influence a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Verification,
    HelpCompleted,
    Rating,
    GroupJoined,
    CampaignJoined,
}

impl ActivityKind {
    /// Total number of activity kinds.
    pub const COUNT: usize = 5;

    /// All variants for iteration.
    pub const ALL: [ActivityKind; 5] = [
        Self::Verification,
        Self::HelpCompleted,
        Self::Rating,
        Self::GroupJoined,
        Self::CampaignJoined,
    ];

    /// Fixed unit weight per kind. The effective contribution of an event to
    /// the trust score's activity sum is `unit_weight() * event.weight`.
    ///
    /// `GroupJoined` and `CampaignJoined` carry zero unit weight: they feed
    /// the capped participation-count terms of the formula instead, so a
    /// single event is never counted twice.
    pub fn unit_weight(self) -> f64 {
        match self {
            ActivityKind::Verification => 5.0,
            ActivityKind::HelpCompleted => 2.0,
            ActivityKind::Rating => 1.0,
            ActivityKind::GroupJoined => 0.0,
            ActivityKind::CampaignJoined => 0.0,
        }
    }

    /// Whether this kind contributes to the weighted activity sum
    /// (as opposed to the capped participation counts).
    pub fn feeds_activity_sum(self) -> bool {
        !matches!(self, ActivityKind::GroupJoined | ActivityKind::CampaignJoined)
    }

    /// Storage column form.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Verification => "verification",
            ActivityKind::HelpCompleted => "help_completed",
            ActivityKind::Rating => "rating",
            ActivityKind::GroupJoined => "group_joined",
            ActivityKind::CampaignJoined => "campaign_joined",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verification" => Ok(ActivityKind::Verification),
            "help_completed" => Ok(ActivityKind::HelpCompleted),
            "rating" => Ok(ActivityKind::Rating),
            "group_joined" => Ok(ActivityKind::GroupJoined),
            "campaign_joined" => Ok(ActivityKind::CampaignJoined),
            other => Err(format!("unknown activity kind: {other}")),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One append-only activity record. Immutable once marked `verified`;
/// only verified events ever influence a trust score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityEvent {
    pub member_id: MemberId,
    pub kind: ActivityKind,
    /// Magnitude supplied by the emitting subsystem (e.g. the rating value).
    /// Clamped to be non-negative so the trust score stays monotonic.
    pub weight: f64,
    pub occurred_at: DateTime<Utc>,
    pub verified: bool,
    /// blake3 hash of (member, kind, weight, occurred_at, verified) — the
    /// dedup key that makes at-least-once ingestion idempotent. The verified
    /// flag is part of the identity so a verified copy of a previously seen
    /// unverified event is a new append, not a silent no-op.
    pub event_hash: String,
}

impl ActivityEvent {
    /// Build an event, deriving its dedup hash.
    pub fn new(
        member_id: MemberId,
        kind: ActivityKind,
        weight: f64,
        occurred_at: DateTime<Utc>,
        verified: bool,
    ) -> Self {
        let weight = weight.max(0.0);
        let event_hash = Self::hash_fields(&member_id, kind, weight, occurred_at, verified);
        Self {
            member_id,
            kind,
            weight,
            occurred_at,
            verified,
            event_hash,
        }
    }

    /// Effective contribution to the trust score's activity sum.
    pub fn effective_weight(&self) -> f64 {
        self.kind.unit_weight() * self.weight
    }

    fn hash_fields(
        member_id: &MemberId,
        kind: ActivityKind,
        weight: f64,
        occurred_at: DateTime<Utc>,
        verified: bool,
    ) -> String {
        let input = format!(
            "{}|{}|{}|{}|{}",
            member_id,
            kind,
            weight,
            occurred_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            verified,
        );
        blake3::hash(input.as_bytes()).to_hex().to_string()
    }
}
