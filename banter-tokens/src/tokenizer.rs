//! Whitespace tokenization with normalization and stopword filtering.

use crate::normalize::{is_stopword, normalize};

/// Split text into normalized tokens.
///
/// Lowercases, strips non-alphanumerics per word, folds synonyms, and
/// drops stopwords and empty remnants. Empty input yields an empty
/// vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .collect()
}
