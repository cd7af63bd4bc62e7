//! The fallback chain, executed in strict order with a return on the
//! first success:
//!
//! 1. exact-topic lookup (confidence-ranked, random tie-break)
//! 2. fuzzy topic match by edit distance
//! 3. embedding-similarity generation
//! 4. the static fallback string
//!
//! No match anywhere is not an error; the chain always yields a
//! string.

mod exact;
mod fuzzy;
mod generate;

pub use exact::best_match;
pub use fuzzy::nearest_topic;
pub use generate::generate;

use tracing::debug;

use banter_core::config::EngineConfig;
use banter_core::constants::FALLBACK_RESPONSE;
use banter_core::errors::BanterResult;
use banter_core::traits::{IKnowledgeStore, IRankingBias};
use banter_embeddings::EmbeddingStore;

/// Run the full chain for one input.
///
/// Side effect: a step-1 hit records usage on the chosen entry.
pub fn select_response(
    kb: &dyn IKnowledgeStore,
    embeddings: &EmbeddingStore,
    config: &EngineConfig,
    bias: Option<&dyn IRankingBias>,
    input: &str,
) -> BanterResult<String> {
    // Step 1: exact-topic lookup.
    if let Some(entry) = best_match(kb, input, bias)? {
        kb.record_use(entry.id)?;
        debug!(topic = %entry.topic, id = entry.id, "exact match");
        return Ok(entry.response);
    }

    // Step 2: fuzzy topic match.
    debug!(input, "no exact match, trying fuzzy topics");
    if let Some(topic) = nearest_topic(kb, input, config.fuzzy_distance_threshold)? {
        if let Some(response) = kb.first_response_for(&topic)? {
            debug!(%topic, "fuzzy match");
            return Ok(response);
        }
    }

    // Step 3: embedding-similarity generation.
    debug!(input, "no fuzzy match, generating from embeddings");
    if let Some(response) = generate(embeddings, input, config.generation_top_k) {
        return Ok(response);
    }

    // Step 4: static fallback.
    debug!(input, "all strategies empty, using static fallback");
    Ok(FALLBACK_RESPONSE.to_string())
}
