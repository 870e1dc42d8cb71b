use crate::errors::KithResult;
use crate::models::{ConnectionRecord, Decision, MemberId, PairStatus};

/// The authoritative Connection Ledger interface.
///
/// Injected wherever connection state is read or mutated — view-layer code
/// never queries storage directly, and all mutation passes through the two
/// named operations.
pub trait IConnectionLedger: Send + Sync {
    // --- Mutation (the entire state machine) ---

    /// Create a pending request. Fails with `SelfConnection` when the ids
    /// match, `DuplicateConnection` when any record exists for the unordered
    /// pair regardless of status.
    fn send_request(
        &self,
        requester: &MemberId,
        addressee: &MemberId,
    ) -> KithResult<ConnectionRecord>;

    /// Resolve a pending request. Fails with `NotFound` for an unknown id,
    /// `Forbidden` when the responder is not the addressee, and
    /// `AlreadyResolved` once the record is terminal (first write wins).
    fn respond(
        &self,
        connection_id: &str,
        decision: Decision,
        responder: &MemberId,
    ) -> KithResult<ConnectionRecord>;

    // --- Reads ---

    /// Pair status relative to `viewer`, for UI button rendering.
    fn status_between(&self, viewer: &MemberId, other: &MemberId) -> KithResult<PairStatus>;

    /// Fetch one record by id.
    fn record(&self, connection_id: &str) -> KithResult<Option<ConnectionRecord>>;

    /// Every record (any status) involving the member.
    fn records_for(&self, member: &MemberId) -> KithResult<Vec<ConnectionRecord>>;

    /// Every accepted unordered pair — the edge list of the social graph.
    fn accepted_pairs(&self) -> KithResult<Vec<(MemberId, MemberId)>>;

    /// Members with an accepted edge to `member`.
    fn neighbors_of(&self, member: &MemberId) -> KithResult<Vec<MemberId>>;

    /// Count of accepted edges for `member`.
    fn accepted_count(&self, member: &MemberId) -> KithResult<usize>;
}
