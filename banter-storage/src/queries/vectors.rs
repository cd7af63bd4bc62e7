//! Upsert and lookup for the `word_vectors` table, plus the text
//! serialization of vectors.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use banter_core::errors::BanterResult;

use crate::to_storage_err;

/// Serialize a vector as space-separated decimal floats.
///
/// Rust's float formatting emits the shortest representation that
/// parses back to the same value, so the round-trip is exact.
pub fn encode_vector(vector: &[f32]) -> String {
    vector
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a space- or comma-separated float field. Unparseable pieces
/// are skipped and contribute nothing; a fully unparseable field
/// yields an empty vector, which callers treat as a miss.
pub fn decode_vector(text: &str) -> Vec<f32> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| piece.parse::<f32>().ok())
        .collect()
}

/// Look up the persisted vector for a token. A row whose vector field
/// decodes to nothing counts as missing.
pub fn get(conn: &Connection, token: &str) -> BanterResult<Option<Vec<f32>>> {
    let text: Option<String> = conn
        .query_row(
            "SELECT vector FROM word_vectors WHERE token = ?1",
            params![token],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(format!("vector get: {e}")))?;

    Ok(text.and_then(|t| {
        let vector = decode_vector(&t);
        if vector.is_empty() {
            warn!(token, "persisted vector is unparseable, treating as missing");
            None
        } else {
            Some(vector)
        }
    }))
}

/// Upsert a vector. Last write wins.
pub fn put(conn: &Connection, token: &str, vector: &[f32]) -> BanterResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO word_vectors (token, vector) VALUES (?1, ?2)",
        params![token, encode_vector(vector)],
    )
    .map_err(|e| to_storage_err(format!("vector put: {e}")))?;
    Ok(())
}

/// Every (token, vector) row in insertion order. Rows with
/// unparseable vector fields are skipped.
pub fn all(conn: &Connection) -> BanterResult<Vec<(String, Vec<f32>)>> {
    let mut stmt = conn
        .prepare("SELECT token, vector FROM word_vectors ORDER BY rowid")
        .map_err(|e| to_storage_err(format!("vector all prepare: {e}")))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(format!("vector all query: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        let (token, text) = row.map_err(|e| to_storage_err(format!("vector all row: {e}")))?;
        let vector = decode_vector(&text);
        if vector.is_empty() {
            warn!(token, "skipping unparseable persisted vector");
            continue;
        }
        out.push((token, vector));
    }
    Ok(out)
}

/// Whether the table holds any rows.
pub fn is_empty(conn: &Connection) -> BanterResult<bool> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM word_vectors", [], |row| row.get(0))
        .map_err(|e| to_storage_err(format!("vector count: {e}")))?;
    Ok(count == 0)
}
