//! Pool of read connections (concurrent, never blocked by the writer via WAL).

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use kith_core::errors::{KithError, KithResult, StorageError};

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Maximum number of read connections.
const MAX_POOL_SIZE: usize = 8;

struct ReadPoolInner {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

/// A pool of read-only SQLite connections, handed out round-robin.
/// Cheap to clone — clones share the pool.
#[derive(Clone)]
pub struct ReadPool {
    inner: Arc<ReadPoolInner>,
}

impl ReadPool {
    /// Open a pool of read connections to the given database path.
    pub fn open(path: &Path, pool_size: usize) -> KithResult<Self> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            inner: Arc::new(ReadPoolInner {
                connections,
                next: AtomicUsize::new(0),
            }),
        })
    }

    /// Create an in-memory pool (for testing). Each connection is an isolated
    /// database — callers in in-memory mode must route reads through the
    /// writer instead.
    pub fn open_in_memory(pool_size: usize) -> KithResult<Self> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            inner: Arc::new(ReadPoolInner {
                connections,
                next: AtomicUsize::new(0),
            }),
        })
    }

    /// Execute a closure with a read connection from the pool (round-robin).
    pub fn with_conn<F, T>(&self, f: F) -> KithResult<T>
    where
        F: FnOnce(&Connection) -> KithResult<T>,
    {
        let idx = self.inner.next.fetch_add(1, Ordering::Relaxed) % self.inner.connections.len();
        let guard = self.inner.connections[idx].lock().map_err(|e| -> KithError {
            StorageError::PoolPoisoned {
                message: e.to_string(),
            }
            .into()
        })?;
        f(&guard)
    }

    /// Number of connections in the pool.
    pub fn size(&self) -> usize {
        self.inner.connections.len()
    }
}
