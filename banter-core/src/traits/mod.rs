//! Trait seams between the engine and its collaborators.
//!
//! Components depend on these interfaces, never on the storage engine
//! or any front-end directly.

mod knowledge;
mod ranking;
mod responder;
mod vectors;

pub use knowledge::IKnowledgeStore;
pub use ranking::IRankingBias;
pub use responder::IResponder;
pub use vectors::IVectorTable;
