//! Exact-topic lookup with confidence ranking.

use std::cmp::Ordering;

use rand::seq::SliceRandom;

use banter_core::errors::BanterResult;
use banter_core::models::KnowledgeEntry;
use banter_core::traits::{IKnowledgeStore, IRankingBias};

/// Pick the best entry whose topic equals the input exactly.
///
/// Candidates are shuffled before a stable sort on descending
/// confidence, so ties resolve by uniform random choice — intentional
/// variety injection, not positional bias. The optional ranking bias
/// adds to each entry's sort key; with no hook installed the raw
/// stored confidence alone decides.
pub fn best_match(
    kb: &dyn IKnowledgeStore,
    input: &str,
    bias: Option<&dyn IRankingBias>,
) -> BanterResult<Option<KnowledgeEntry>> {
    let mut entries = kb.find_by_topic(input)?;
    if entries.is_empty() {
        return Ok(None);
    }

    entries.shuffle(&mut rand::thread_rng());
    entries.sort_by(|a, b| {
        sort_key(b, bias)
            .partial_cmp(&sort_key(a, bias))
            .unwrap_or(Ordering::Equal)
    });

    Ok(entries.into_iter().next())
}

fn sort_key(entry: &KnowledgeEntry, bias: Option<&dyn IRankingBias>) -> f64 {
    entry.confidence + bias.map_or(0.0, |b| b.bias(entry))
}
