use crate::models::KnowledgeEntry;

/// Optional hook for biasing exact-match ranking.
///
/// The context tracker implements this, but the selector does not
/// install any hook by default: context relevance is observable state
/// only. A host that wants context-aware ranking opts in explicitly.
pub trait IRankingBias: Send + Sync {
    /// Additive score applied on top of an entry's stored confidence
    /// when ranking exact-topic candidates.
    fn bias(&self, entry: &KnowledgeEntry) -> f64;
}
