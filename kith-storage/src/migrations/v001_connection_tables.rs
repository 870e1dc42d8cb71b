//! v001: connections table with the unordered-pair uniqueness constraint.

use rusqlite::Connection;

use kith_core::errors::KithResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> KithResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS connections (
            id           TEXT PRIMARY KEY,
            requester_id TEXT NOT NULL,
            addressee_id TEXT NOT NULL,
            pair_lo      TEXT NOT NULL,
            pair_hi      TEXT NOT NULL,
            status       TEXT NOT NULL DEFAULT 'pending',
            created_at   TEXT NOT NULL,
            responded_at TEXT,
            CHECK (requester_id <> addressee_id),
            CHECK (pair_lo < pair_hi),
            CHECK (status IN ('pending', 'accepted', 'declined'))
        );

        -- One record per unordered pair, any status. Concurrent requests for
        -- the same pair race on this index: exactly one insert commits.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_connections_pair
            ON connections(pair_lo, pair_hi);

        CREATE INDEX IF NOT EXISTS idx_connections_requester ON connections(requester_id);
        CREATE INDEX IF NOT EXISTS idx_connections_addressee ON connections(addressee_id);
        CREATE INDEX IF NOT EXISTS idx_connections_status ON connections(status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
