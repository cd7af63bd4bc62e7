//! Embedding-similarity generation: the last resort before the static
//! fallback.

use std::cmp::Ordering;

use tracing::warn;

use banter_embeddings::similarity::cosine_similarity;
use banter_embeddings::vectorizer::vectorize;
use banter_embeddings::EmbeddingStore;

/// Synthesize a reply by ranking every stored token and phrase vector
/// against the input's embedding and concatenating the top K keys.
///
/// Returns `None` when the store has nothing to offer; storage
/// failures degrade the same way rather than propagating.
pub fn generate(embeddings: &EmbeddingStore, input: &str, top_k: usize) -> Option<String> {
    let input_vec = vectorize(embeddings, input);

    let rows = match embeddings.all() {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "vector scan failed during generation");
            return None;
        }
    };
    if rows.is_empty() || top_k == 0 {
        return None;
    }

    let mut candidates: Vec<(String, f32)> = rows
        .into_iter()
        .map(|(token, vector)| {
            let similarity = cosine_similarity(&input_vec, &vector);
            (token, similarity)
        })
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let response = candidates
        .into_iter()
        .take(top_k)
        .map(|(token, _)| token)
        .collect::<Vec<_>>()
        .join(" ");

    if response.is_empty() {
        None
    } else {
        Some(response)
    }
}
