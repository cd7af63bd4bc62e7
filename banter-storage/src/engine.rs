//! StorageEngine — owns the SQLite connection and implements the
//! IKnowledgeStore + IVectorTable seams.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rusqlite::Connection;
use tracing::{info, warn};

use banter_core::errors::{BanterResult, StorageError};
use banter_core::models::{Confidence, KnowledgeEntry};
use banter_core::traits::{IKnowledgeStore, IVectorTable};

use crate::queries;
use crate::schema;

/// The storage engine. A single connection behind a mutex: the core is
/// synchronous request/response, and a concurrent host gets
/// single-writer-at-a-time correctness around each read-modify-write.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> BanterResult<Self> {
        let conn = Connection::open(path).map_err(|e| StorageError::Unavailable {
            reason: format!("{}: {e}", path.display()),
        })?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        info!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine. Used for tests and as the
    /// degraded fallback when the file-backed store cannot be opened.
    pub fn open_in_memory() -> BanterResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Unavailable {
            reason: e.to_string(),
        })?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open the file-backed store, degrading to in-memory on failure
    /// so the engine still answers. The degradation is logged, not
    /// propagated.
    pub fn open_or_degrade(path: &Path) -> BanterResult<Self> {
        match Self::open(path) {
            Ok(engine) => Ok(engine),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage unavailable, degrading to in-memory");
                Self::open_in_memory()
            }
        }
    }

    fn initialize(&self) -> BanterResult<()> {
        self.with_conn(schema::create_tables)
    }

    /// Run a closure against the connection. A poisoned mutex is
    /// recovered rather than propagated: SQLite state is still valid
    /// after a panicking reader.
    pub fn with_conn<F, T>(&self, f: F) -> BanterResult<T>
    where
        F: FnOnce(&Connection) -> BanterResult<T>,
    {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }
}

impl IKnowledgeStore for StorageEngine {
    fn insert(&self, topic: &str, response: &str, confidence: f64) -> BanterResult<i64> {
        self.with_conn(|conn| queries::knowledge::insert(conn, topic, response, confidence))
    }

    fn find_by_topic(&self, topic: &str) -> BanterResult<Vec<KnowledgeEntry>> {
        self.with_conn(|conn| queries::knowledge::find_by_topic(conn, topic))
    }

    fn all_topics(&self) -> BanterResult<Vec<String>> {
        self.with_conn(queries::knowledge::all_topics)
    }

    fn first_response_for(&self, topic: &str) -> BanterResult<Option<String>> {
        self.with_conn(|conn| queries::knowledge::first_response_for(conn, topic))
    }

    fn all_pairs(&self) -> BanterResult<Vec<(String, String)>> {
        self.with_conn(queries::knowledge::all_pairs)
    }

    fn adjust_confidence(&self, topic: &str, response: &str, delta: f64) -> BanterResult<()> {
        self.with_conn(|conn| queries::knowledge::adjust_confidence(conn, topic, response, delta))
    }

    fn confidence_for(&self, topic: &str, response: &str) -> BanterResult<Confidence> {
        self.with_conn(|conn| queries::knowledge::confidence_for(conn, topic, response))
    }

    fn raw_confidence(&self, topic: &str, response: &str) -> BanterResult<Option<f64>> {
        self.with_conn(|conn| queries::knowledge::raw_confidence(conn, topic, response))
    }

    fn record_use(&self, id: i64) -> BanterResult<()> {
        self.with_conn(|conn| queries::knowledge::record_use(conn, id))
    }
}

impl IVectorTable for StorageEngine {
    fn get(&self, token: &str) -> BanterResult<Option<Vec<f32>>> {
        self.with_conn(|conn| queries::vectors::get(conn, token))
    }

    fn put(&self, token: &str, vector: &[f32]) -> BanterResult<()> {
        self.with_conn(|conn| queries::vectors::put(conn, token, vector))
    }

    fn all(&self) -> BanterResult<Vec<(String, Vec<f32>)>> {
        self.with_conn(queries::vectors::all)
    }

    fn is_empty(&self) -> BanterResult<bool> {
        self.with_conn(queries::vectors::is_empty)
    }
}
