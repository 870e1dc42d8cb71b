//! # kith-storage
//!
//! SQLite persistence for the Connection Ledger and activity feed.
//! One serialized write connection plus a round-robin read pool (WAL mode),
//! versioned migrations, and query modules of free functions over
//! `&Connection`. The uniqueness constraint that arbitrates concurrent
//! `send_request` races lives here, in the schema, not in client code.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod profile_projection;
pub mod queries;

pub use engine::StorageEngine;
pub use profile_projection::ProfileProjection;

use kith_core::errors::{KithError, StorageError};

/// Wrap an opaque SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> KithError {
    StorageError::Sqlite {
        message: message.into(),
    }
    .into()
}

/// Map a rusqlite error onto the storage taxonomy.
///
/// Constraint violations become `UniqueViolation` (the ledger turns the
/// pair-index case into `DuplicateConnection`); busy/locked become the
/// retryable `Unavailable`; everything else is opaque `Sqlite`.
pub(crate) fn map_sqlite_err(e: rusqlite::Error) -> KithError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StorageError::UniqueViolation {
                message: e.to_string(),
            }
            .into()
        }
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::DatabaseBusy
                || err.code == rusqlite::ErrorCode::DatabaseLocked =>
        {
            StorageError::Unavailable {
                message: e.to_string(),
            }
            .into()
        }
        _ => StorageError::Sqlite {
            message: e.to_string(),
        }
        .into(),
    }
}
