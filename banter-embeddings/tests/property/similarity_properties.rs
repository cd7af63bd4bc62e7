//! Property tests for the similarity engine.

use banter_embeddings::similarity::{cosine_similarity, edit_distance};
use proptest::prelude::*;

proptest! {
    /// Distance to self is zero.
    #[test]
    fn edit_distance_identity(s in "[ -~]{0,32}") {
        prop_assert_eq!(edit_distance(&s, &s), 0);
    }

    /// Distance is symmetric.
    #[test]
    fn edit_distance_symmetry(a in "[ -~]{0,24}", b in "[ -~]{0,24}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    /// Distance never exceeds the longer string's length.
    #[test]
    fn edit_distance_upper_bound(a in "[ -~]{0,24}", b in "[ -~]{0,24}") {
        let bound = a.chars().count().max(b.chars().count());
        prop_assert!(edit_distance(&a, &b) <= bound);
    }

    /// Cosine stays within [-1, 1] for finite input.
    #[test]
    fn cosine_is_bounded(
        a in prop::collection::vec(-100.0f32..100.0, 3),
        b in prop::collection::vec(-100.0f32..100.0, 3),
    ) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0001..=1.0001).contains(&sim));
    }

    /// Mismatched dimensions always degrade to zero similarity.
    #[test]
    fn cosine_dimension_mismatch_is_zero(
        a in prop::collection::vec(-10.0f32..10.0, 2),
        b in prop::collection::vec(-10.0f32..10.0, 4),
    ) {
        prop_assert_eq!(cosine_similarity(&a, &b), 0.0);
    }
}
