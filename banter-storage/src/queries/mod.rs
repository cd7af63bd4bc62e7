//! Query modules, one per table. All functions take a borrowed
//! connection so they compose under a single lock acquisition.

pub mod knowledge;
pub mod vectors;
