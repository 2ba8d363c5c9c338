//! # chunkwise
//!
//! Text chunking strategies for retrieval and indexing pipelines.
//!
//! A [`Chunker`] turns a document into an ordered list of [`Chunk`]s, each
//! carrying its text, character offsets into the source and overlap
//! bookkeeping. Four strategies are provided and can be selected by name
//! at runtime through [`create_chunker`].
//!
//! ## Features
//!
//! - **Fixed size** and **sliding window** character windows
//! - **Sentence based** grouping using Unicode sentence boundaries
//! - **Recursive** structural splitting for Markdown-like text
//! - **Parallel** batch chunking with rayon
//! - **Unicode aware**: offsets and lengths count characters, not bytes
//!
//! ## Example
//!
//! ```
//! use chunkwise::{Chunker, Parameters, create_chunker};
//!
//! let chunker = create_chunker("sentence_based", &Parameters::new()).unwrap();
//! let chunks = chunker.chunk_text("One sentence. Another one.");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].text(), "One sentence. Another one.");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::Chunk;

// Re-export chunking types
pub use chunking::{
    Chunker, FixedSizeChunker, ParallelChunker, Parameters, RecursiveChunker,
    SentenceBasedChunker, SlidingWindowChunker, StrategyConfig, StrategyKind, StrategyMetadata,
    available_strategies, create_chunker, describe_all,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
