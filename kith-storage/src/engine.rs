//! StorageEngine — owns the ConnectionPool, runs migrations on open, and
//! implements the activity-feed boundary trait. Ledger mutations live in
//! kith-ledger; this engine only provides the shared substrate.

use std::path::Path;

use kith_core::errors::KithResult;
use kith_core::models::{ActivityEvent, ActivityKind, MemberId};
use kith_core::traits::IActivityFeed;

use crate::migrations;
use crate::pool::ConnectionPool;

/// The storage engine. Owns the connection pool.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> KithResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> KithResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> KithResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for services that issue their
    /// own queries, e.g. the ledger).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Whether reads should go through the read pool.
    pub fn uses_read_pool(&self) -> bool {
        self.use_read_pool
    }

    /// Execute a read-only query on the best available connection.
    pub fn with_reader<F, T>(&self, f: F) -> KithResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> KithResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IActivityFeed for StorageEngine {
    fn append(&self, event: &ActivityEvent) -> KithResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::activity_ops::append_event(conn, event))
    }

    fn verified_events(&self, member: &MemberId) -> KithResult<Vec<ActivityEvent>> {
        self.with_reader(|conn| crate::queries::activity_ops::verified_events(conn, member))
    }

    fn verified_kind_count(&self, member: &MemberId, kind: ActivityKind) -> KithResult<usize> {
        self.with_reader(|conn| {
            crate::queries::activity_ops::verified_kind_count(conn, member, kind)
        })
    }
}
