use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Confidence;

/// One taught (topic, response) pair with its usage metadata.
///
/// `id` is assigned by storage, immutable and monotonic. `confidence`
/// is the raw stored value and is unbounded: feedback accumulates
/// additively and callers clamp through [`Confidence`] at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: i64,
    /// The taught trigger string.
    pub topic: String,
    pub response: String,
    /// Raw stored confidence. Unbounded at write time.
    pub confidence: f64,
    /// Number of times this entry was selected. Starts at 1.
    pub use_count: u32,
    pub created_at: DateTime<Utc>,
    /// Set on first selection; `None` until then.
    pub last_used: Option<DateTime<Utc>>,
}

impl KnowledgeEntry {
    /// The stored confidence clamped into [0, 1].
    pub fn clamped_confidence(&self) -> Confidence {
        Confidence::new(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_view_bounds_raw_value() {
        let entry = KnowledgeEntry {
            id: 1,
            topic: "hello".into(),
            response: "Hi there!".into(),
            confidence: 2.3,
            use_count: 1,
            created_at: Utc::now(),
            last_used: None,
        };
        assert_eq!(entry.clamped_confidence().value(), 1.0);
        assert_eq!(entry.confidence, 2.3);
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let entry = KnowledgeEntry {
            id: 7,
            topic: "hello".into(),
            response: "Hi there!".into(),
            confidence: 0.3,
            use_count: 2,
            created_at: Utc::now(),
            last_used: Some(Utc::now()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: KnowledgeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.topic, entry.topic);
        assert_eq!(back.response, entry.response);
        assert_eq!(back.confidence, entry.confidence);
        assert_eq!(back.use_count, entry.use_count);
        assert_eq!(back.created_at, entry.created_at);
        assert_eq!(back.last_used, entry.last_used);
    }
}
