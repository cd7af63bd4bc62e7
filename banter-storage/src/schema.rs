//! Table creation. Both tables are created idempotently on open.

use rusqlite::Connection;

use banter_core::errors::BanterResult;

use crate::to_storage_err;

/// Create the `responses` and `word_vectors` tables if absent.
///
/// `confidence` is REAL and deliberately unbounded: feedback
/// accumulates at write time and reads clamp. Vectors are stored as
/// space-separated decimal floats in a single text field.
pub fn create_tables(conn: &Connection) -> BanterResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS responses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            topic TEXT NOT NULL,
            response TEXT NOT NULL,
            confidence REAL NOT NULL DEFAULT 0.5,
            use_count INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            last_used TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_responses_topic ON responses(topic);

        CREATE TABLE IF NOT EXISTS word_vectors (
            token TEXT PRIMARY KEY,
            vector TEXT NOT NULL
        );",
    )
    .map_err(|e| to_storage_err(format!("create_tables: {e}")))
}
