//! ChatEngine — owns the knowledge base, embedding store, and context
//! tracker for the lifetime of a session, and exposes the whole core
//! to front-ends through `IResponder`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use banter_core::config::EngineConfig;
use banter_core::constants::{DEFAULT_CONFIDENCE, ECHO_GUARD_RESPONSE, FALLBACK_RESPONSE};
use banter_core::errors::{BanterError, BanterResult};
use banter_core::traits::{IKnowledgeStore, IRankingBias, IResponder};
use banter_embeddings::{model_file, trainer, EmbeddingStore};
use banter_storage::StorageEngine;

use crate::context::ContextTracker;
use crate::select;
use crate::teach;

/// Outcome of a bulk-teach run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub imported: usize,
    pub rejected: usize,
}

/// The conversational core. One instance per session; it exclusively
/// owns its stores.
pub struct ChatEngine {
    storage: Arc<StorageEngine>,
    embeddings: EmbeddingStore,
    context: ContextTracker,
    config: EngineConfig,
    bias: Option<Box<dyn IRankingBias>>,
}

impl ChatEngine {
    /// Open the engine over the configured database file. An
    /// unopenable store is logged and degraded to in-memory so the
    /// engine still answers.
    pub fn open(config: EngineConfig) -> BanterResult<Self> {
        let storage = Arc::new(StorageEngine::open_or_degrade(&config.db_path)?);
        Ok(Self::with_storage(storage, config))
    }

    /// Fully in-memory engine, for tests and ephemeral sessions.
    pub fn in_memory(config: EngineConfig) -> BanterResult<Self> {
        let storage = Arc::new(StorageEngine::open_in_memory()?);
        Ok(Self::with_storage(storage, config))
    }

    fn with_storage(storage: Arc<StorageEngine>, config: EngineConfig) -> Self {
        let embeddings = EmbeddingStore::new(
            storage.clone(),
            config.embedding_dimensions,
            config.embedding_cache_size,
        );
        let context = ContextTracker::new(config.context_window_capacity);
        info!(
            dims = config.embedding_dimensions,
            window = config.context_window_capacity,
            "engine ready"
        );
        Self {
            storage,
            embeddings,
            context,
            config,
            bias: None,
        }
    }

    /// Install a ranking-bias hook. Off by default: context relevance
    /// influences nothing unless a host opts in here.
    pub fn set_ranking_bias(&mut self, bias: Box<dyn IRankingBias>) {
        self.bias = Some(bias);
    }

    /// The advisory context tracker (observable state only).
    pub fn context(&self) -> &ContextTracker {
        &self.context
    }

    /// Insert a (topic, response) pair at the taught default
    /// confidence and run the embedding training step so later
    /// similarity lookups can find it.
    pub fn teach(&self, topic: &str, response: &str) -> BanterResult<()> {
        self.teach_with_confidence(topic, response, self.config.taught_confidence)
    }

    fn teach_with_confidence(
        &self,
        topic: &str,
        response: &str,
        confidence: f64,
    ) -> BanterResult<()> {
        self.storage.insert(topic, response, confidence)?;
        trainer::train(&self.embeddings, topic, response)?;
        info!(topic, "taught new response");
        Ok(())
    }

    /// Bulk-teach from comma-separated `topic,response,confidence`
    /// rows. Malformed rows are logged and skipped; the rest import.
    pub fn bulk_teach_from_csv(&self, path: &Path) -> BanterResult<BulkOutcome> {
        let file = File::open(path).map_err(|e| BanterError::ModelFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut outcome = BulkOutcome::default();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| BanterError::ModelFile {
                path: path.display().to_string(),
                reason: format!("line {}: {e}", number + 1),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            match teach::parse_bulk_row(&line, number + 1) {
                Ok((topic, response, confidence)) => {
                    self.teach_with_confidence(&topic, &response, confidence)?;
                    outcome.imported += 1;
                }
                Err(e) => {
                    warn!(error = %e, "skipping bulk row");
                    outcome.rejected += 1;
                }
            }
        }

        info!(
            imported = outcome.imported,
            rejected = outcome.rejected,
            "bulk teach complete"
        );
        Ok(outcome)
    }

    /// Re-run the training step over every stored pair, then export
    /// the model file. The dev-mode retrain path.
    pub fn retrain_from_store(&self, export_path: &Path) -> BanterResult<usize> {
        let pairs = self.storage.all_pairs()?;
        let trained = trainer::train_all(&self.embeddings, &pairs)?;
        model_file::export(&self.embeddings, export_path)?;
        info!(trained, "retrain complete, model exported");
        Ok(trained)
    }

    fn select(&self, input: &str) -> BanterResult<String> {
        select::select_response(
            self.storage.as_ref(),
            &self.embeddings,
            &self.config,
            self.bias.as_deref(),
            input,
        )
    }
}

impl IResponder for ChatEngine {
    fn initialize(&mut self, model_path: &Path) -> BanterResult<()> {
        let imported = model_file::import(&self.embeddings, model_path)?;
        debug!(imported, "initialized from model file");
        Ok(())
    }

    fn respond(&mut self, input: &str) -> String {
        self.context.add_message(input);
        self.context.boost_topic_relevance_by_keywords(input);

        let response = match self.select(input) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "selection failed, using static fallback");
                return FALLBACK_RESPONSE.to_string();
            }
        };

        // Echo guard: an empty reply or a parroted input reads as a
        // failure to the user, so substitute the rephrase prompt.
        if response.is_empty() || response == input {
            debug!(input, "echo detected, substituting rephrase prompt");
            return ECHO_GUARD_RESPONSE.to_string();
        }
        response
    }

    fn teach_command(&mut self, input: &str) -> BanterResult<()> {
        let (topic, response) = teach::parse_teach_command(input)?;
        self.teach(&topic, &response)
    }

    fn record_feedback(&mut self, input: &str, response: &str, positive: bool) -> BanterResult<()> {
        let delta = if positive {
            self.config.feedback_step
        } else {
            -self.config.feedback_step
        };
        self.storage.adjust_confidence(input, response, delta)
    }

    fn confidence_for(&self, input: &str, response: &str) -> f64 {
        match self.storage.confidence_for(input, response) {
            Ok(confidence) => confidence.value(),
            Err(e) => {
                warn!(error = %e, "confidence lookup failed, using default");
                DEFAULT_CONFIDENCE
            }
        }
    }
}
