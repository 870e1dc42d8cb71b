//! Error types for every kith subsystem, aggregated into [`KithError`].

mod events_error;
mod ledger_error;
mod storage_error;

pub use events_error::EventsError;
pub use ledger_error::LedgerError;
pub use storage_error::StorageError;

/// Workspace-wide result alias.
pub type KithResult<T> = Result<T, KithError>;

/// Aggregate error for the kith workspace.
#[derive(Debug, thiserror::Error)]
pub enum KithError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Events(#[from] EventsError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl KithError {
    /// Whether a caller may safely retry the failed operation with backoff.
    ///
    /// Only transient storage failures qualify. Validation failures
    /// (`LedgerError`) are caller-correctable and must never be retried
    /// blindly — a `DuplicateConnection` or `AlreadyResolved` usually means
    /// the caller's cached view was stale, and the right reaction is a
    /// refresh, not a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            KithError::Storage(StorageError::Unavailable { .. })
        )
    }
}
