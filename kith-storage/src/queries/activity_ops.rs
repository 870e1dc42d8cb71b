//! Append-only activity event storage.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use kith_core::errors::KithResult;
use kith_core::models::{ActivityEvent, ActivityKind, MemberId};

use crate::{map_sqlite_err, to_storage_err};

/// Append an event. Returns `false` when the dedup hash already exists —
/// the idempotent no-op path for at-least-once upstream delivery.
pub fn append_event(conn: &Connection, event: &ActivityEvent) -> KithResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO activity_events
                (member_id, kind, weight, occurred_at, verified, event_hash)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.member_id.as_str(),
                event.kind.as_str(),
                event.weight,
                event.occurred_at.to_rfc3339(),
                event.verified as i64,
                event.event_hash,
            ],
        )
        .map_err(map_sqlite_err)?;
    Ok(inserted > 0)
}

/// All verified events for a member, oldest first.
pub fn verified_events(conn: &Connection, member: &MemberId) -> KithResult<Vec<ActivityEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT member_id, kind, weight, occurred_at, verified, event_hash
             FROM activity_events
             WHERE member_id = ?1 AND verified = 1
             ORDER BY occurred_at ASC, id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![member.as_str()], event_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(results)
}

/// Count of verified events of one kind for a member.
pub fn verified_kind_count(
    conn: &Connection,
    member: &MemberId,
    kind: ActivityKind,
) -> KithResult<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM activity_events
         WHERE member_id = ?1 AND kind = ?2 AND verified = 1",
        params![member.as_str(), kind.as_str()],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<ActivityEvent> {
    let kind_str: String = row.get(1)?;
    let occurred_at_str: String = row.get(3)?;
    let verified_int: i64 = row.get(4)?;

    let kind = ActivityKind::from_str(&kind_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })?;

    let occurred_at = DateTime::parse_from_rfc3339(&occurred_at_str)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

    Ok(ActivityEvent {
        member_id: MemberId(row.get(0)?),
        kind,
        weight: row.get(2)?,
        occurred_at,
        verified: verified_int != 0,
        event_hash: row.get(5)?,
    })
}
