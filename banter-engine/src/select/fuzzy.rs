//! Fuzzy topic matching by Levenshtein distance.

use banter_core::errors::BanterResult;
use banter_core::traits::IKnowledgeStore;
use banter_embeddings::similarity::edit_distance;

/// Find the known topic closest to the input by edit distance.
///
/// Returns the topic only when the minimum distance is strictly below
/// the threshold; otherwise the input falls through to generation.
/// The first topic at the minimum distance wins.
pub fn nearest_topic(
    kb: &dyn IKnowledgeStore,
    input: &str,
    threshold: usize,
) -> BanterResult<Option<String>> {
    let mut best: Option<(usize, String)> = None;

    for topic in kb.all_topics()? {
        let distance = edit_distance(input, &topic);
        if best.as_ref().map_or(true, |(d, _)| distance < *d) {
            best = Some((distance, topic));
        }
    }

    Ok(best
        .filter(|(distance, _)| *distance < threshold)
        .map(|(_, topic)| topic))
}
