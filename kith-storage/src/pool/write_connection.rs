//! The single serialized write connection.
//!
//! SQLite allows one writer at a time; funneling every mutation through one
//! mutex-guarded connection turns writer contention into simple queueing
//! instead of `SQLITE_BUSY` churn. Cheap to clone — clones share the
//! underlying connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use kith_core::errors::{KithError, KithResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Shared handle to the write connection.
#[derive(Clone)]
pub struct WriteConnection {
    inner: Arc<Mutex<Connection>>,
}

impl WriteConnection {
    /// Open the writer for the given database file.
    pub fn open(path: &Path) -> KithResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory writer (for testing).
    pub fn open_in_memory() -> KithResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a closure while holding the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> KithResult<T>
    where
        F: FnOnce(&Connection) -> KithResult<T>,
    {
        let guard = self.inner.lock().map_err(|e| -> KithError {
            StorageError::PoolPoisoned {
                message: e.to_string(),
            }
            .into()
        })?;
        f(&guard)
    }
}
