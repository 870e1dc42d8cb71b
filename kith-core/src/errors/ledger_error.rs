/// Connection Ledger validation failures.
///
/// All variants are caller-correctable; none are retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("member {member_id} cannot send a connection request to themselves")]
    SelfConnection { member_id: String },

    /// A record already exists for the unordered pair, in any status.
    /// A prior declined record blocks new requests too — UIs should render
    /// this as a silent no-op or refresh, not an alarming error.
    #[error("a connection record already exists between {member_a} and {member_b}")]
    DuplicateConnection { member_a: String, member_b: String },

    #[error("no connection record with id {connection_id}")]
    NotFound { connection_id: String },

    #[error("member {member_id} is not the addressee of connection {connection_id}")]
    Forbidden {
        member_id: String,
        connection_id: String,
    },

    /// The record reached a terminal status before this call. First write
    /// wins; the loser sees the status that actually stuck.
    #[error("connection {connection_id} is already resolved to {status}")]
    AlreadyResolved {
        connection_id: String,
        status: String,
    },
}
