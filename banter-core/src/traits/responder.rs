use std::path::Path;

use crate::errors::BanterResult;

/// The entire contract a front-end (GUI, CLI, web) needs from the core.
///
/// `respond` is infallible by design: selection failures degrade
/// through the fallback chain to a static string, never past this
/// boundary.
pub trait IResponder {
    /// Load pre-seeded embeddings from a model file and import them
    /// into the persistent store when it is empty.
    fn initialize(&mut self, model_path: &Path) -> BanterResult<()>;

    /// Produce a response for free-text input. Always returns some
    /// string.
    fn respond(&mut self, input: &str) -> String;

    /// Teach from a `topic=response` command string. A missing
    /// separator rejects the input locally as a no-op.
    fn teach_command(&mut self, input: &str) -> BanterResult<()>;

    /// Apply positive or negative feedback to a (topic, response) pair.
    fn record_feedback(&mut self, input: &str, response: &str, positive: bool) -> BanterResult<()>;

    /// Read-time clamped confidence for a (topic, response) pair.
    fn confidence_for(&self, input: &str, response: &str) -> f64;
}
