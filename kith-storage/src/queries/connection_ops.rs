//! Connection record CRUD and graph reads.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use kith_core::errors::KithResult;
use kith_core::models::{ConnectionRecord, ConnectionStatus, MemberId};

use crate::{map_sqlite_err, to_storage_err};

/// Insert a fresh pending record. The `(pair_lo, pair_hi)` unique index is
/// the race arbiter: a violation means some record (any status, either
/// direction) already occupies the unordered pair.
pub fn insert_connection(conn: &Connection, record: &ConnectionRecord) -> KithResult<()> {
    let (lo, hi) = record.pair_key();
    conn.execute(
        "INSERT INTO connections
            (id, requester_id, addressee_id, pair_lo, pair_hi, status, created_at, responded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.id,
            record.requester_id.as_str(),
            record.addressee_id.as_str(),
            lo.as_str(),
            hi.as_str(),
            record.status.as_str(),
            record.created_at.to_rfc3339(),
            record.responded_at.map(|t| t.to_rfc3339()),
        ],
    )
    .map_err(map_sqlite_err)?;
    Ok(())
}

/// Fetch one record by id.
pub fn get_connection(conn: &Connection, id: &str) -> KithResult<Option<ConnectionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, requester_id, addressee_id, status, created_at, responded_at
             FROM connections WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![id], record_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))?)),
        None => Ok(None),
    }
}

/// Fetch the record occupying an unordered pair, if any.
pub fn get_by_pair(
    conn: &Connection,
    a: &MemberId,
    b: &MemberId,
) -> KithResult<Option<ConnectionRecord>> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut stmt = conn
        .prepare(
            "SELECT id, requester_id, addressee_id, status, created_at, responded_at
             FROM connections WHERE pair_lo = ?1 AND pair_hi = ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![lo.as_str(), hi.as_str()], record_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))?)),
        None => Ok(None),
    }
}

/// Resolve a pending record to a terminal status. The `status = 'pending'`
/// guard makes the first concurrent writer win; losers see zero affected
/// rows and must report `AlreadyResolved`.
pub fn resolve_connection(
    conn: &Connection,
    id: &str,
    status: ConnectionStatus,
    responded_at: DateTime<Utc>,
) -> KithResult<usize> {
    conn.execute(
        "UPDATE connections
         SET status = ?2, responded_at = ?3
         WHERE id = ?1 AND status = 'pending'",
        params![id, status.as_str(), responded_at.to_rfc3339()],
    )
    .map_err(map_sqlite_err)
}

/// Every record (any status) involving a member, oldest first.
pub fn records_for_member(
    conn: &Connection,
    member: &MemberId,
) -> KithResult<Vec<ConnectionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, requester_id, addressee_id, status, created_at, responded_at
             FROM connections
             WHERE requester_id = ?1 OR addressee_id = ?1
             ORDER BY created_at ASC, id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![member.as_str()], record_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(results)
}

/// Every accepted unordered pair.
pub fn accepted_pairs(conn: &Connection) -> KithResult<Vec<(MemberId, MemberId)>> {
    let mut stmt = conn
        .prepare("SELECT pair_lo, pair_hi FROM connections WHERE status = 'accepted'")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (lo, hi) = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push((MemberId(lo), MemberId(hi)));
    }
    Ok(results)
}

/// Members with an accepted edge to `member`.
pub fn neighbors_of(conn: &Connection, member: &MemberId) -> KithResult<Vec<MemberId>> {
    let mut stmt = conn
        .prepare(
            "SELECT CASE WHEN requester_id = ?1 THEN addressee_id ELSE requester_id END
             FROM connections
             WHERE status = 'accepted' AND (requester_id = ?1 OR addressee_id = ?1)
             ORDER BY 1 ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![member.as_str()], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(MemberId(row.map_err(|e| to_storage_err(e.to_string()))?));
    }
    Ok(results)
}

/// Count of accepted edges for a member.
pub fn accepted_count(conn: &Connection, member: &MemberId) -> KithResult<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM connections
         WHERE status = 'accepted' AND (requester_id = ?1 OR addressee_id = ?1)",
        params![member.as_str()],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ConnectionRecord> {
    let status_str: String = row.get(3)?;
    let created_at_str: String = row.get(4)?;
    let responded_at_str: Option<String> = row.get(5)?;

    let status = ConnectionStatus::from_str(&status_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })?;

    Ok(ConnectionRecord {
        id: row.get(0)?,
        requester_id: MemberId(row.get(1)?),
        addressee_id: MemberId(row.get(2)?),
        status,
        created_at: parse_timestamp(&created_at_str, 4)?,
        responded_at: match responded_at_str {
            Some(s) => Some(parse_timestamp(&s, 5)?),
            None => None,
        },
    })
}

fn parse_timestamp(s: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
