//! Error taxonomy for the engine.
//!
//! Each subsystem gets its own enum; `BanterError` aggregates them.
//! Policy throughout the workspace: degrade to a safe default rather
//! than propagate — the engine must always produce a response string.

mod storage_error;
mod teach_error;

pub use storage_error::StorageError;
pub use teach_error::TeachError;

/// Top-level error for the Banter workspace.
#[derive(Debug, thiserror::Error)]
pub enum BanterError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Teach(#[from] TeachError),

    #[error("model file {path}: {reason}")]
    ModelFile { path: String, reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type BanterResult<T> = Result<T, BanterError>;
