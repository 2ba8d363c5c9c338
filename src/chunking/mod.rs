//! Chunking strategies.
//!
//! This module provides a trait-based system for splitting documents into
//! [`Chunk`](crate::core::Chunk)s. Four strategies are registered:
//!
//! - **Fixed size**: equal-length character windows with optional overlap
//! - **Sliding window**: windows advancing by a fixed stride
//! - **Sentence based**: groups of whole sentences
//! - **Recursive**: structural splitting at headers, paragraphs, sentences,
//!   clauses and whitespace
//!
//! Strategies are looked up by name through [`create_chunker`] and
//! [`StrategyKind`]; [`ParallelChunker`] applies any of them to a batch.

pub mod config;
pub mod fixed;
pub mod metadata;
pub mod parallel;
pub mod recursive;
pub mod sentence;
pub mod sentences;
pub mod sliding;
pub mod traits;

pub use config::{
    FixedSizeConfig, PARAMETER_RANGES, ParameterRange, RecursiveConfig, SentenceConfig,
    SlidingWindowConfig, StrategyConfig, parameter_ranges,
};
pub use fixed::FixedSizeChunker;
pub use metadata::StrategyMetadata;
pub use parallel::ParallelChunker;
pub use recursive::{Boundary, RecursiveChunker};
pub use sentence::SentenceBasedChunker;
pub use sentences::{RegexSentenceSplitter, SentenceSplitter, UnicodeSentenceSplitter};
pub use sliding::SlidingWindowChunker;
pub use traits::{Chunker, Parameters};

use crate::error::{ChunkingError, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a registered chunking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`FixedSizeChunker`].
    FixedSize,
    /// [`SlidingWindowChunker`].
    SlidingWindow,
    /// [`SentenceBasedChunker`].
    SentenceBased,
    /// [`RecursiveChunker`].
    Recursive,
}

impl StrategyKind {
    /// Every registered strategy, in registry order.
    pub const ALL: [Self; 4] = [
        Self::FixedSize,
        Self::SlidingWindow,
        Self::SentenceBased,
        Self::Recursive,
    ];

    /// Registry name, as accepted by [`create_chunker`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedSize => "fixed_size",
            Self::SlidingWindow => "sliding_window",
            Self::SentenceBased => "sentence_based",
            Self::Recursive => "recursive",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FixedSize => "Fixed Size",
            Self::SlidingWindow => "Sliding Window",
            Self::SentenceBased => "Sentence Based",
            Self::Recursive => "Recursive",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    /// Parses a strategy name.
    ///
    /// Matching is case-insensitive, treats `-` and spaces like `_`, and
    /// accepts the short aliases `fixed`, `sliding` and `sentence`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fixed_size" | "fixed" => Ok(Self::FixedSize),
            "sliding_window" | "sliding" => Ok(Self::SlidingWindow),
            "sentence_based" | "sentence" => Ok(Self::SentenceBased),
            "recursive" => Ok(Self::Recursive),
            _ => Err(ChunkingError::UnknownStrategy {
                name: s.to_string(),
            }
            .into()),
        }
    }
}

/// Creates a chunker by name.
///
/// # Arguments
///
/// * `name` - Strategy name, see [`StrategyKind::from_str`].
/// * `params` - Parameter overrides; missing parameters take their defaults.
///
/// # Errors
///
/// Returns [`ChunkingError::UnknownStrategy`] for an unrecognized name,
/// [`ChunkingError::UnknownParameter`] for a parameter the strategy does not
/// take, or a configuration error if the values cannot make progress.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Parameters, create_chunker};
///
/// let params = Parameters::from([("chunk_size".to_string(), 10)]);
/// let chunker = create_chunker("fixed_size", &params).unwrap();
/// assert_eq!(chunker.chunk_text("Hello world! How are you?").len(), 3);
/// ```
pub fn create_chunker(name: &str, params: &Parameters) -> Result<Box<dyn Chunker>> {
    let kind: StrategyKind = name.parse()?;
    StrategyConfig::from_parameters(kind, params)?.build()
}

/// Lists the registered strategies.
#[must_use]
pub const fn available_strategies() -> &'static [StrategyKind] {
    &StrategyKind::ALL
}

/// Metadata for every registered strategy with default parameters.
#[must_use]
pub fn describe_all() -> Vec<StrategyMetadata> {
    available_strategies()
        .iter()
        .filter_map(|&kind| StrategyConfig::default_for(kind).build().ok())
        .map(|chunker| chunker.describe())
        .collect()
}
