//! ConnectionLedger — the single service every surface goes through for
//! connection state. All mutation is `send_request` and `respond`; nothing
//! else writes the connections table.

use chrono::Utc;
use tracing::{debug, instrument, warn};

use kith_core::errors::{KithError, KithResult, LedgerError, StorageError};
use kith_core::models::{
    ConnectionChange, ConnectionRecord, Decision, MemberId, PairStatus,
};
use kith_core::traits::IConnectionLedger;

use kith_events::ChangeBus;
use kith_storage::pool::{ReadPool, WriteConnection};
use kith_storage::queries::connection_ops;
use kith_storage::StorageEngine;

/// The authoritative Connection Ledger service.
///
/// Multiple independent client processes may run this service against the
/// same database file. Correctness under that concurrency rests on two
/// storage-level rules, not on client-side locking:
/// - the `(pair_lo, pair_hi)` unique index arbitrates racing `send_request`
///   calls (one insert commits, the loser maps to `DuplicateConnection`);
/// - the `status = 'pending'` guard on the resolve UPDATE makes the first
///   `respond` win (the loser observes `AlreadyResolved`).
pub struct ConnectionLedger {
    writer: WriteConnection,
    readers: ReadPool,
    bus: ChangeBus,
    use_read_pool: bool,
}

impl ConnectionLedger {
    /// Create a ledger over explicit pool handles.
    pub fn new(writer: WriteConnection, readers: ReadPool, bus: ChangeBus) -> Self {
        Self {
            writer,
            readers,
            bus,
            use_read_pool: true,
        }
    }

    /// Create a ledger sharing a storage engine's pool, inheriting its
    /// read-routing mode.
    pub fn from_engine(storage: &StorageEngine, bus: ChangeBus) -> Self {
        let ledger = Self::new(
            storage.pool().writer.clone(),
            storage.pool().readers.clone(),
            bus,
        );
        if storage.uses_read_pool() {
            ledger
        } else {
            ledger.with_read_pool_disabled()
        }
    }

    /// Route reads through the writer (in-memory mode, where read pool
    /// connections are isolated databases).
    pub fn with_read_pool_disabled(mut self) -> Self {
        self.use_read_pool = false;
        self
    }

    /// The bus this ledger publishes on.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    fn with_reader<F, T>(&self, f: F) -> KithResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> KithResult<T>,
    {
        if self.use_read_pool {
            self.readers.with_conn(f)
        } else {
            self.writer.with_conn_sync(f)
        }
    }

    fn publish(&self, record: &ConnectionRecord) {
        let delivered = self.bus.publish(ConnectionChange::from_record(record));
        debug!(
            connection_id = %record.id,
            status = %record.status,
            delivered,
            "published connection change"
        );
    }
}

impl IConnectionLedger for ConnectionLedger {
    #[instrument(skip(self))]
    fn send_request(
        &self,
        requester: &MemberId,
        addressee: &MemberId,
    ) -> KithResult<ConnectionRecord> {
        if requester == addressee {
            return Err(LedgerError::SelfConnection {
                member_id: requester.to_string(),
            }
            .into());
        }

        let record = ConnectionRecord::new_pending(requester.clone(), addressee.clone());
        let inserted = self
            .writer
            .with_conn_sync(|conn| connection_ops::insert_connection(conn, &record));

        match inserted {
            Ok(()) => {
                self.publish(&record);
                Ok(record)
            }
            // The pair index rejected the insert: some record, any status,
            // either direction, already occupies the pair.
            Err(KithError::Storage(StorageError::UniqueViolation { .. })) => {
                debug!(%requester, %addressee, "pair already has a record");
                Err(LedgerError::DuplicateConnection {
                    member_a: requester.to_string(),
                    member_b: addressee.to_string(),
                }
                .into())
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    fn respond(
        &self,
        connection_id: &str,
        decision: Decision,
        responder: &MemberId,
    ) -> KithResult<ConnectionRecord> {
        let resolved = self.writer.with_conn_sync(|conn| {
            let record = connection_ops::get_connection(conn, connection_id)?.ok_or_else(|| {
                KithError::from(LedgerError::NotFound {
                    connection_id: connection_id.to_string(),
                })
            })?;

            if record.addressee_id != *responder {
                return Err(LedgerError::Forbidden {
                    member_id: responder.to_string(),
                    connection_id: connection_id.to_string(),
                }
                .into());
            }

            if record.status.is_terminal() {
                return Err(LedgerError::AlreadyResolved {
                    connection_id: connection_id.to_string(),
                    status: record.status.to_string(),
                }
                .into());
            }

            let responded_at = Utc::now();
            let status = decision.into_status();
            let changed =
                connection_ops::resolve_connection(conn, connection_id, status, responded_at)?;
            if changed == 0 {
                // Another process resolved it between our read and the
                // guarded UPDATE. First write wins; report what stuck.
                let current = connection_ops::get_connection(conn, connection_id)?;
                let stuck = current
                    .map(|r| r.status.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                warn!(connection_id, stuck = %stuck, "lost respond race");
                return Err(LedgerError::AlreadyResolved {
                    connection_id: connection_id.to_string(),
                    status: stuck,
                }
                .into());
            }

            Ok(ConnectionRecord {
                status,
                responded_at: Some(responded_at),
                ..record
            })
        })?;

        self.publish(&resolved);
        Ok(resolved)
    }

    fn status_between(&self, viewer: &MemberId, other: &MemberId) -> KithResult<PairStatus> {
        if viewer == other {
            return Ok(PairStatus::None);
        }
        self.with_reader(|conn| {
            Ok(connection_ops::get_by_pair(conn, viewer, other)?
                .map(|record| record.status_for(viewer))
                .unwrap_or(PairStatus::None))
        })
    }

    fn record(&self, connection_id: &str) -> KithResult<Option<ConnectionRecord>> {
        self.with_reader(|conn| connection_ops::get_connection(conn, connection_id))
    }

    fn records_for(&self, member: &MemberId) -> KithResult<Vec<ConnectionRecord>> {
        self.with_reader(|conn| connection_ops::records_for_member(conn, member))
    }

    fn accepted_pairs(&self) -> KithResult<Vec<(MemberId, MemberId)>> {
        self.with_reader(connection_ops::accepted_pairs)
    }

    fn neighbors_of(&self, member: &MemberId) -> KithResult<Vec<MemberId>> {
        self.with_reader(|conn| connection_ops::neighbors_of(conn, member))
    }

    fn accepted_count(&self, member: &MemberId) -> KithResult<usize> {
        self.with_reader(|conn| connection_ops::accepted_count(conn, member))
    }
}
