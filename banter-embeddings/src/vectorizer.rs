//! Utterance vectorization: normalized mean of token vectors.

use banter_tokens::tokenize;

use crate::store::EmbeddingStore;

/// Compose an utterance's embedding: tokenize, fetch each token's
/// vector, take the elementwise mean, then L2-normalize. No tokens
/// yields the zero vector, and normalization is a no-op on zero norm.
/// Deterministic given fixed embeddings.
pub fn vectorize(store: &EmbeddingStore, text: &str) -> Vec<f32> {
    let tokens = tokenize(text);
    let mut sum = store.zero();

    for token in &tokens {
        for (acc, v) in sum.iter_mut().zip(store.get(token)) {
            *acc += v;
        }
    }

    if !tokens.is_empty() {
        let count = tokens.len() as f32;
        for v in &mut sum {
            *v /= count;
        }
    }

    l2_normalize(&mut sum);
    sum
}

fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
