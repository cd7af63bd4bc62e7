//! Insert, query, confidence, and usage ops for the `responses` table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use banter_core::constants::DEFAULT_CONFIDENCE;
use banter_core::errors::BanterResult;
use banter_core::models::{Confidence, KnowledgeEntry};

use crate::to_storage_err;

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<KnowledgeEntry> {
    let created_at: String = row.get(5)?;
    let last_used: Option<String> = row.get(6)?;
    Ok(KnowledgeEntry {
        id: row.get(0)?,
        topic: row.get(1)?,
        response: row.get(2)?,
        confidence: row.get(3)?,
        use_count: row.get(4)?,
        created_at: parse_timestamp(&created_at),
        last_used: last_used.as_deref().map(parse_timestamp),
    })
}

/// Parse an RFC 3339 timestamp, degrading to the epoch on a malformed
/// field rather than failing the whole row.
fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Append a new entry with a fresh AUTOINCREMENT id. `use_count`
/// starts at 1; the stored confidence is taken as-is, unbounded.
pub fn insert(conn: &Connection, topic: &str, response: &str, confidence: f64) -> BanterResult<i64> {
    conn.execute(
        "INSERT INTO responses (topic, response, confidence, use_count, created_at)
         VALUES (?1, ?2, ?3, 1, ?4)",
        params![topic, response, confidence, Utc::now().to_rfc3339()],
    )
    .map_err(|e| to_storage_err(format!("insert: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// All entries whose topic equals the query exactly, in id order.
pub fn find_by_topic(conn: &Connection, topic: &str) -> BanterResult<Vec<KnowledgeEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, topic, response, confidence, use_count, created_at, last_used
             FROM responses WHERE topic = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(format!("find_by_topic prepare: {e}")))?;
    let rows = stmt
        .query_map(params![topic], entry_from_row)
        .map_err(|e| to_storage_err(format!("find_by_topic query: {e}")))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(format!("find_by_topic row: {e}")))
}

/// Every known topic string, in insertion order. Duplicates are kept:
/// fuzzy search only needs the minimum distance, and the first match
/// wins anyway.
pub fn all_topics(conn: &Connection) -> BanterResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT topic FROM responses ORDER BY id")
        .map_err(|e| to_storage_err(format!("all_topics prepare: {e}")))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(format!("all_topics query: {e}")))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(format!("all_topics row: {e}")))
}

/// First stored response for a topic (lowest id), if any.
pub fn first_response_for(conn: &Connection, topic: &str) -> BanterResult<Option<String>> {
    conn.query_row(
        "SELECT response FROM responses WHERE topic = ?1 ORDER BY id LIMIT 1",
        params![topic],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(format!("first_response_for: {e}")))
}

/// Every (topic, response) pair, for retraining and model export.
pub fn all_pairs(conn: &Connection) -> BanterResult<Vec<(String, String)>> {
    let mut stmt = conn
        .prepare("SELECT topic, response FROM responses ORDER BY id")
        .map_err(|e| to_storage_err(format!("all_pairs prepare: {e}")))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|e| to_storage_err(format!("all_pairs query: {e}")))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(format!("all_pairs row: {e}")))
}

/// Add `delta` to the stored confidence of a (topic, response) pair.
/// The UPDATE matches zero rows when the pair is absent, which is the
/// required no-op: feedback never creates entries.
pub fn adjust_confidence(
    conn: &Connection,
    topic: &str,
    response: &str,
    delta: f64,
) -> BanterResult<()> {
    conn.execute(
        "UPDATE responses SET confidence = confidence + ?1 WHERE topic = ?2 AND response = ?3",
        params![delta, topic, response],
    )
    .map_err(|e| to_storage_err(format!("adjust_confidence: {e}")))?;
    Ok(())
}

/// Stored confidence clamped into [0, 1]; the default midpoint when
/// the pair is unknown.
pub fn confidence_for(conn: &Connection, topic: &str, response: &str) -> BanterResult<Confidence> {
    let raw = raw_confidence(conn, topic, response)?;
    Ok(Confidence::new(raw.unwrap_or(DEFAULT_CONFIDENCE)))
}

/// The raw, unclamped stored confidence.
pub fn raw_confidence(
    conn: &Connection,
    topic: &str,
    response: &str,
) -> BanterResult<Option<f64>> {
    conn.query_row(
        "SELECT confidence FROM responses WHERE topic = ?1 AND response = ?2 LIMIT 1",
        params![topic, response],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(format!("raw_confidence: {e}")))
}

/// Increment `use_count` and stamp `last_used` on a selected entry.
pub fn record_use(conn: &Connection, id: i64) -> BanterResult<()> {
    conn.execute(
        "UPDATE responses SET use_count = use_count + 1, last_used = ?1 WHERE id = ?2",
        params![Utc::now().to_rfc3339(), id],
    )
    .map_err(|e| to_storage_err(format!("record_use: {e}")))?;
    Ok(())
}
