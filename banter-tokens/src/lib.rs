//! # banter-tokens
//!
//! Tokenizer and normalizer for the Banter response engine.
//! Everything here is a pure function: the same input always yields
//! the same output, with no side effects.

mod normalize;
mod tokenizer;

pub use normalize::{clean, is_stopword, normalize};
pub use tokenizer::tokenize;
