//! # banter-engine
//!
//! The matching-and-reinforcement core of the Banter response engine:
//! the strict fallback chain (exact → fuzzy → generate → static),
//! teaching and feedback, bulk import, and the advisory context
//! tracker. `ChatEngine` is the single entry point front-ends bind to
//! through the `IResponder` trait.

pub mod context;
pub mod select;
pub mod teach;

mod responder;

pub use context::ContextTracker;
pub use responder::{BulkOutcome, ChatEngine};
