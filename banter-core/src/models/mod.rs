//! Model types shared across the workspace.

mod confidence;
mod entry;

pub use confidence::Confidence;
pub use entry::KnowledgeEntry;
