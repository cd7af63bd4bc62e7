//! # banter-storage
//!
//! SQLite persistence for the Banter response engine: the `responses`
//! knowledge-base table and the `word_vectors` embedding table.
//! Exposed to the rest of the workspace only through the
//! `IKnowledgeStore` and `IVectorTable` traits from banter-core.

mod engine;
mod schema;

pub mod queries;

pub use engine::StorageEngine;

use banter_core::errors::{BanterError, StorageError};

/// Map a low-level failure message into the storage error variant.
pub(crate) fn to_storage_err(message: String) -> BanterError {
    StorageError::SqliteError { message }.into()
}
