//! # banter-embeddings
//!
//! Embedding layer for the Banter response engine: the read-through
//! vector store, the mean-of-tokens vectorizer, cosine and
//! edit-distance similarity, the deliberately simple additive trainer,
//! and the line-oriented model interchange format.

pub mod model_file;
pub mod similarity;
pub mod trainer;
pub mod vectorizer;

mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use store::EmbeddingStore;
