//! Read-through embedding store.
//!
//! The in-memory tier replaces the original design's process-wide
//! pretrained-embedding global: it is owned here, passed in
//! explicitly, and loaded once via model import.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, warn};

use banter_core::errors::BanterResult;
use banter_core::traits::IVectorTable;

/// Token/phrase → fixed-dimension vector, cached in memory over the
/// persistent word-vector table.
///
/// Lookups never fail: a total miss resolves to the zero vector so
/// downstream averaging always gets a vector of the right shape.
pub struct EmbeddingStore {
    table: Arc<dyn IVectorTable>,
    cache: Cache<String, Vec<f32>>,
    dimensions: usize,
}

impl EmbeddingStore {
    /// Create a store over a persistent vector table.
    pub fn new(table: Arc<dyn IVectorTable>, dimensions: usize, cache_size: u64) -> Self {
        Self {
            table,
            cache: Cache::new(cache_size),
            dimensions,
        }
    }

    /// The fixed dimensionality every vector is coerced to.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Look up a token's vector: cache, then table, then the
    /// deterministic zero default. Table failures degrade to the
    /// default as well.
    pub fn get(&self, token: &str) -> Vec<f32> {
        if let Some(vector) = self.cache.get(token) {
            return vector;
        }

        match self.table.get(token) {
            Ok(Some(vector)) => {
                let vector = self.fit(vector, token);
                self.cache.insert(token.to_string(), vector.clone());
                vector
            }
            Ok(None) => self.zero(),
            Err(e) => {
                warn!(token, error = %e, "vector lookup failed, using default");
                self.zero()
            }
        }
    }

    /// Upsert a vector, padding or truncating to the configured
    /// dimension, and write through the cache. Last write wins.
    pub fn put(&self, token: &str, vector: &[f32]) -> BanterResult<()> {
        let vector = self.fit(vector.to_vec(), token);
        self.table.put(token, &vector)?;
        self.cache.insert(token.to_string(), vector);
        Ok(())
    }

    /// Every persisted (token, vector) row, coerced to the configured
    /// dimension.
    pub fn all(&self) -> BanterResult<Vec<(String, Vec<f32>)>> {
        let rows = self.table.all()?;
        Ok(rows
            .into_iter()
            .map(|(token, vector)| {
                let fitted = self.fit(vector, &token);
                (token, fitted)
            })
            .collect())
    }

    /// Whether the persistent table holds any vectors.
    pub fn is_empty(&self) -> BanterResult<bool> {
        self.table.is_empty()
    }

    /// The deterministic default for unseen tokens.
    pub fn zero(&self) -> Vec<f32> {
        vec![0.0; self.dimensions]
    }

    /// Coerce a vector to the configured dimension: truncate the
    /// excess, pad shortfall with zeros.
    fn fit(&self, mut vector: Vec<f32>, token: &str) -> Vec<f32> {
        if vector.len() != self.dimensions {
            debug!(
                token,
                got = vector.len(),
                want = self.dimensions,
                "coercing vector dimension"
            );
            vector.resize(self.dimensions, 0.0);
        }
        vector
    }
}
