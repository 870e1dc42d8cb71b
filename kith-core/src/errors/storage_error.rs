/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    /// A storage-level uniqueness constraint rejected a write. The ledger
    /// maps violations of the unordered-pair index to `DuplicateConnection`.
    #[error("unique constraint violated: {message}")]
    UniqueViolation { message: String },

    #[error("connection pool lock poisoned: {message}")]
    PoolPoisoned { message: String },

    /// Transient failure (busy database, lost connection, timeout).
    /// The only retryable kind; see `KithError::is_retryable`.
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}
