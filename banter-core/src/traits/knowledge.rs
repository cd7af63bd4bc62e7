use crate::errors::BanterResult;
use crate::models::{Confidence, KnowledgeEntry};

/// Ordered collection of taught (topic, response) pairs.
pub trait IKnowledgeStore: Send + Sync {
    // --- Insert ---
    /// Append a new entry with a fresh monotonic id, `use_count = 1`
    /// and `created_at = now`. Returns the assigned id.
    fn insert(&self, topic: &str, response: &str, confidence: f64) -> BanterResult<i64>;

    // --- Query ---
    /// All entries whose topic equals the query exactly (case-sensitive).
    fn find_by_topic(&self, topic: &str) -> BanterResult<Vec<KnowledgeEntry>>;

    /// Every known topic string, in insertion order, for fuzzy search.
    fn all_topics(&self) -> BanterResult<Vec<String>>;

    /// First stored response for a topic, if any.
    fn first_response_for(&self, topic: &str) -> BanterResult<Option<String>>;

    /// Every (topic, response) pair, for retraining and export.
    fn all_pairs(&self) -> BanterResult<Vec<(String, String)>>;

    // --- Confidence ---
    /// Add `delta` to the stored confidence of the unique (topic,
    /// response) pair. No-op if the pair is absent — never creates an
    /// entry. The stored value is unbounded.
    fn adjust_confidence(&self, topic: &str, response: &str, delta: f64) -> BanterResult<()>;

    /// Stored confidence clamped into [0, 1]; the default midpoint if
    /// the pair is absent.
    fn confidence_for(&self, topic: &str, response: &str) -> BanterResult<Confidence>;

    /// The raw, unclamped stored confidence, if the pair exists.
    /// Read-only inspection of accumulated feedback drift.
    fn raw_confidence(&self, topic: &str, response: &str) -> BanterResult<Option<f64>>;

    // --- Usage ---
    /// Increment `use_count` and stamp `last_used` on a selected entry.
    fn record_use(&self, id: i64) -> BanterResult<()>;
}
