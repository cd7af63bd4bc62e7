/// Banter system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed dimensionality of every token and phrase vector.
pub const EMBEDDING_DIMENSIONS: usize = 3;

/// Edit-distance threshold for fuzzy topic matching. A topic matches
/// only when its distance to the input is strictly below this.
pub const FUZZY_DISTANCE_THRESHOLD: usize = 3;

/// Number of top-similarity tokens concatenated by the generation step.
pub const GENERATION_TOP_K: usize = 1;

/// Capacity of the recent-message context window.
pub const CONTEXT_WINDOW_CAPACITY: usize = 5;

/// Confidence assigned to freshly taught responses. Kept below the
/// default so organically confirmed responses outrank new ones.
pub const TAUGHT_CONFIDENCE: f64 = 0.3;

/// Confidence delta applied per feedback event.
pub const FEEDBACK_STEP: f64 = 0.1;

/// Confidence reported for unknown (topic, response) pairs.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Additive per-dimension nudge applied by the training step.
pub const TRAINING_NUDGE: f32 = 0.05;

/// Default size of the in-memory embedding cache (entries).
pub const EMBEDDING_CACHE_SIZE: u64 = 10_000;

/// Static fallback when every selection strategy comes up empty.
pub const FALLBACK_RESPONSE: &str = "I don't know yet.";

/// Reply substituted when the selector echoes the input back verbatim.
pub const ECHO_GUARD_RESPONSE: &str = "I'm not sure how to respond to that. Can you rephrase?";

/// Context-tracker keywords must be longer than this many characters.
pub const KEYWORD_MIN_LEN: usize = 3;
