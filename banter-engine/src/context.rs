//! Bounded recent-message window and keyword relevance scores.
//!
//! Purely additive memory: nothing in the selection chain reads this
//! unless a host installs the tracker as a ranking bias explicitly.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use banter_core::constants::KEYWORD_MIN_LEN;
use banter_core::models::KnowledgeEntry;
use banter_core::traits::IRankingBias;

/// Scale applied per relevance point when the tracker is used as a
/// ranking bias. Small enough that confidence dominates until a topic
/// has been mentioned repeatedly.
const BIAS_PER_POINT: f64 = 0.01;

/// Tracks the last N user messages and how often keywords recur.
///
/// The window evicts FIFO at capacity. Relevance scores only ever
/// grow; unbounded growth is an accepted property of the design.
pub struct ContextTracker {
    window: VecDeque<String>,
    capacity: usize,
    topic_relevance: BTreeMap<String, u32>,
}

impl ContextTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            topic_relevance: BTreeMap::new(),
        }
    }

    /// Push a message, evicting the oldest when the window is full.
    pub fn add_message(&mut self, text: &str) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(text.to_string());
    }

    /// The retained messages, oldest first.
    pub fn recent_messages(&self) -> impl Iterator<Item = &str> {
        self.window.iter().map(String::as_str)
    }

    /// Keywords are raw whitespace words longer than the length
    /// cutoff. A length heuristic, deliberately not stopword-based.
    pub fn extract_keywords(text: &str) -> BTreeSet<String> {
        text.split_whitespace()
            .filter(|word| word.chars().count() > KEYWORD_MIN_LEN)
            .map(str::to_string)
            .collect()
    }

    /// Bump a single keyword's relevance.
    pub fn boost_topic_relevance(&mut self, topic: &str, amount: u32) {
        *self.topic_relevance.entry(topic.to_string()).or_insert(0) += amount;
    }

    /// Extract keywords from a message and bump each by one.
    pub fn boost_topic_relevance_by_keywords(&mut self, text: &str) {
        for keyword in Self::extract_keywords(text) {
            self.boost_topic_relevance(&keyword, 1);
        }
    }

    /// Current relevance score for a keyword.
    pub fn relevance(&self, topic: &str) -> u32 {
        self.topic_relevance.get(topic).copied().unwrap_or(0)
    }

    /// List topics mentioned more than once, as `topic(score)` pairs.
    pub fn summarize(&self) -> String {
        let mut out = String::new();
        for (topic, score) in &self.topic_relevance {
            if *score > 1 {
                out.push_str(&format!("{topic}({score}) "));
            }
        }
        out.trim_end().to_string()
    }
}

/// Opt-in ranking bias: an entry gains `BIAS_PER_POINT` per relevance
/// point of every keyword appearing in its topic or response. Not
/// installed anywhere by default.
impl IRankingBias for ContextTracker {
    fn bias(&self, entry: &KnowledgeEntry) -> f64 {
        let mut keywords = Self::extract_keywords(&entry.topic);
        keywords.extend(Self::extract_keywords(&entry.response));
        keywords
            .iter()
            .map(|k| f64::from(self.relevance(k)) * BIAS_PER_POINT)
            .sum()
    }
}
