//! Multi-factor suggestion scorer (4 factors).
//!
//! Factors: mutual connections, shared skills, shared interests, co-location.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use ts_rs::TS;

use kith_core::config::SuggestConfig;
use kith_core::constants::MAX_SUGGESTION_LIMIT;
use kith_core::errors::KithResult;
use kith_core::models::{Member, MemberId};
use kith_core::traits::{IConnectionLedger, IProfileStore};

use kith_graph::AcceptedGraph;

/// One ranked discovery entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestion {
    pub member: Member,
    /// Composite score; higher is better.
    pub score: f64,
    /// Mutual connections with the viewer, surfaced for "N mutual" labels.
    pub mutual_count: usize,
}

/// Ranked member discovery over profiles + the connection graph.
pub struct SuggestionEngine {
    profiles: Arc<dyn IProfileStore>,
    ledger: Arc<dyn IConnectionLedger>,
    config: SuggestConfig,
}

impl SuggestionEngine {
    /// Create an engine with the given config.
    pub fn new(
        profiles: Arc<dyn IProfileStore>,
        ledger: Arc<dyn IConnectionLedger>,
        config: SuggestConfig,
    ) -> Self {
        Self {
            profiles,
            ledger,
            config,
        }
    }

    /// Get the config.
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Ranked suggestions for a member, best first, at most `limit` entries.
    ///
    /// Returns fewer than `limit` (possibly zero) when the candidate pool is
    /// small — never pads, never errors on a short pool.
    #[instrument(skip(self))]
    pub fn suggest(&self, member_id: &MemberId, limit: usize) -> KithResult<Vec<Suggestion>> {
        let limit = limit.min(MAX_SUGGESTION_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        // A viewer without a profile still gets graph-based suggestions.
        let viewer = self
            .profiles
            .member(member_id)
            .unwrap_or_else(|| Member::bare(member_id.clone()));

        // Exclusion set: self plus the other party of every record, in any
        // status. Declined pairs stay excluded permanently.
        let mut excluded: HashSet<MemberId> = HashSet::new();
        excluded.insert(member_id.clone());
        for record in self.ledger.records_for(member_id)? {
            if let Some(other) = record.other_party(member_id) {
                excluded.insert(other.clone());
            }
        }

        let graph = AcceptedGraph::from_ledger(&*self.ledger)?;

        let candidates: Vec<Member> = self
            .profiles
            .members()
            .into_iter()
            .filter(|m| !excluded.contains(&m.id))
            .collect();

        let mut scored: Vec<Suggestion> = candidates
            .into_par_iter()
            .map(|candidate| self.score_candidate(&viewer, candidate, &graph))
            .collect();

        // Descending by score; ties break on ascending candidate id so the
        // ordering is deterministic across calls and processes.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.member.id.cmp(&b.member.id))
        });
        scored.truncate(limit);

        debug!(%member_id, returned = scored.len(), "generated suggestions");
        Ok(scored)
    }

    /// Ranked suggestions using the configured default limit.
    pub fn suggest_default(&self, member_id: &MemberId) -> KithResult<Vec<Suggestion>> {
        self.suggest(member_id, self.config.default_limit)
    }

    fn score_candidate(
        &self,
        viewer: &Member,
        candidate: Member,
        graph: &AcceptedGraph,
    ) -> Suggestion {
        let w = &self.config;

        let mutual_count = graph.mutual_count(&viewer.id, &candidate.id);
        let shared_skills = viewer.shared_skills(&candidate);
        let shared_interests = viewer.shared_interests(&candidate);
        let co_located = viewer.same_location(&candidate);

        let score = mutual_count as f64 * w.mutual_weight
            + shared_skills as f64 * w.skill_weight
            + shared_interests as f64 * w.interest_weight
            + if co_located { w.location_weight } else { 0.0 };

        Suggestion {
            member: candidate,
            score,
            mutual_count,
        }
    }
}
