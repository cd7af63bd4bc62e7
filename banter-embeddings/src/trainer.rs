//! The teaching-time embedding update.
//!
//! This is an additive nudge, not gradient descent, and it must stay
//! that way: confidence and embedding drift over repeated teaching
//! depend on this exact update law being reproducible.

use tracing::debug;

use banter_core::constants::TRAINING_NUDGE;
use banter_core::errors::BanterResult;

use crate::store::EmbeddingStore;
use crate::vectorizer::vectorize;

/// Reinforce a (input, response) pair: vectorize both strings
/// independently, add the fixed nudge to every dimension, and persist
/// both vectors keyed by the full phrase. Deterministic.
pub fn train(store: &EmbeddingStore, input: &str, response: &str) -> BanterResult<()> {
    let input_vec = nudged(vectorize(store, input));
    let response_vec = nudged(vectorize(store, response));

    store.put(input, &input_vec)?;
    store.put(response, &response_vec)?;

    debug!(input, response, "trained embedding pair");
    Ok(())
}

/// Re-run the training step over every stored (topic, response) pair.
/// The dev-mode bulk retrain path.
pub fn train_all(store: &EmbeddingStore, pairs: &[(String, String)]) -> BanterResult<usize> {
    for (topic, response) in pairs {
        train(store, topic, response)?;
    }
    Ok(pairs.len())
}

fn nudged(mut vector: Vec<f32>) -> Vec<f32> {
    for v in &mut vector {
        *v += TRAINING_NUDGE;
    }
    vector
}
