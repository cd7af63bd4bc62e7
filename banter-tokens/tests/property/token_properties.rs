//! Property tests for tokenization and normalization invariants.

use banter_tokens::{is_stopword, normalize, tokenize};
use proptest::prelude::*;

proptest! {
    /// normalize(normalize(x)) == normalize(x) for arbitrary input.
    #[test]
    fn normalize_is_idempotent(word in "[!-~]{0,24}") {
        let once = normalize(&word);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Tokenization is deterministic.
    #[test]
    fn tokenize_is_deterministic(text in "[ -~]{0,80}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    /// Every produced token is normalized, non-empty, and not a stopword.
    #[test]
    fn tokens_are_normalized_and_filtered(text in "[ -~]{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!is_stopword(&token));
            prop_assert_eq!(normalize(&token), token);
        }
    }
}
