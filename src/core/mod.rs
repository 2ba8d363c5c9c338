//! Core domain model.
//!
//! Pure data types shared by every chunking strategy, with no I/O
//! dependencies.

pub mod chunk;

pub use chunk::Chunk;
