//! Versioned schema migrations, applied in order on open.

mod v001_connection_tables;
mod v002_activity_tables;

use rusqlite::Connection;
use tracing::debug;

use kith_core::errors::{KithResult, StorageError};

use crate::to_storage_err;

type Migration = (u32, fn(&Connection) -> KithResult<()>);

const MIGRATIONS: &[Migration] = &[
    (1, v001_connection_tables::migrate),
    (2, v002_activity_tables::migrate),
];

/// Run every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> KithResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        debug!(version = *version, "applying migration");
        migrate(conn).map_err(|e| {
            kith_core::errors::KithError::from(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        conn.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [*version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// The highest schema version this build knows about.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|(v, _)| *v).unwrap_or(0)
}
