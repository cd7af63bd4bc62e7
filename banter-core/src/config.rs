//! Engine configuration, loadable from TOML with full defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{BanterError, BanterResult};

/// Configuration for the whole engine. Every field has a default so an
/// empty TOML document (or no file at all) yields a working engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Path to the line-oriented model interchange file.
    pub model_path: PathBuf,
    /// Fixed dimensionality of all vectors.
    pub embedding_dimensions: usize,
    /// In-memory embedding cache capacity (entries).
    pub embedding_cache_size: u64,
    /// Edit-distance threshold for fuzzy topic matching.
    pub fuzzy_distance_threshold: usize,
    /// Number of tokens the generation step concatenates.
    pub generation_top_k: usize,
    /// Recent-message window capacity.
    pub context_window_capacity: usize,
    /// Confidence assigned to freshly taught responses.
    pub taught_confidence: f64,
    /// Confidence delta per feedback event.
    pub feedback_step: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("banter.db"),
            model_path: PathBuf::from("model.txt"),
            embedding_dimensions: constants::EMBEDDING_DIMENSIONS,
            embedding_cache_size: constants::EMBEDDING_CACHE_SIZE,
            fuzzy_distance_threshold: constants::FUZZY_DISTANCE_THRESHOLD,
            generation_top_k: constants::GENERATION_TOP_K,
            context_window_capacity: constants::CONTEXT_WINDOW_CAPACITY,
            taught_confidence: constants::TAUGHT_CONFIDENCE,
            feedback_step: constants::FEEDBACK_STEP,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document. Missing fields fall back to defaults.
    pub fn from_toml_str(s: &str) -> BanterResult<Self> {
        toml::from_str(s).map_err(|e| BanterError::Config {
            reason: e.to_string(),
        })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> BanterResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BanterError::Config {
                reason: format!("{}: {e}", path.display()),
            }),
        }
    }
}
