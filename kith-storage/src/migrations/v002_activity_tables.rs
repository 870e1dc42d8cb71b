//! v002: append-only activity_events with a dedup hash.

use rusqlite::Connection;

use kith_core::errors::KithResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> KithResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS activity_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id   TEXT NOT NULL,
            kind        TEXT NOT NULL,
            weight      REAL NOT NULL DEFAULT 1.0,
            occurred_at TEXT NOT NULL,
            verified    INTEGER NOT NULL DEFAULT 0,
            event_hash  TEXT NOT NULL,
            CHECK (kind IN ('verification', 'help_completed', 'rating', 'group_joined', 'campaign_joined')),
            CHECK (weight >= 0.0)
        );

        -- Replayed appends from at-least-once upstream delivery collapse here.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_activity_hash ON activity_events(event_hash);

        CREATE INDEX IF NOT EXISTS idx_activity_member ON activity_events(member_id);
        CREATE INDEX IF NOT EXISTS idx_activity_member_kind ON activity_events(member_id, kind);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
