//! Strategy configuration.
//!
//! Each strategy has a typed configuration struct. Constructors enforce the
//! invariants that keep chunking terminating and well-defined; the wider
//! [`PARAMETER_RANGES`] table describes the ranges a front end should offer
//! and is checked only on request via [`StrategyConfig::check_ranges`].

use crate::chunking::traits::{Chunker, Parameters};
use crate::chunking::{
    FixedSizeChunker, RecursiveChunker, SentenceBasedChunker, SlidingWindowChunker, StrategyKind,
};
use crate::error::{ChunkingError, Result};
use serde::{Deserialize, Serialize};

/// Parameter names.
pub mod param {
    /// Fixed-size chunk length.
    pub const CHUNK_SIZE: &str = "chunk_size";
    /// Fixed-size trailing overlap.
    pub const OVERLAP: &str = "overlap";
    /// Sliding window length.
    pub const WINDOW_SIZE: &str = "window_size";
    /// Sliding window step.
    pub const STRIDE: &str = "stride";
    /// Upper bound on sentences per chunk.
    pub const MAX_SENTENCES: &str = "max_sentences";
    /// Lower bound on sentences per chunk.
    pub const MIN_SENTENCES: &str = "min_sentences";
    /// Upper bound on recursive chunk length.
    pub const MAX_CHUNK_SIZE: &str = "max_chunk_size";
    /// Lower bound on recursive chunk length.
    pub const MIN_CHUNK_SIZE: &str = "min_chunk_size";
}

/// Documented range of one strategy parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterRange {
    /// Strategy the parameter belongs to.
    pub strategy: StrategyKind,
    /// Parameter name.
    pub parameter: &'static str,
    /// Smallest accepted value.
    pub min: usize,
    /// Largest accepted value.
    pub max: usize,
    /// Value used when the parameter is not supplied.
    pub default: usize,
}

const fn range(
    strategy: StrategyKind,
    parameter: &'static str,
    min: usize,
    max: usize,
    default: usize,
) -> ParameterRange {
    ParameterRange {
        strategy,
        parameter,
        min,
        max,
        default,
    }
}

/// Ranges offered to users, per strategy parameter.
pub const PARAMETER_RANGES: &[ParameterRange] = &[
    range(StrategyKind::FixedSize, param::CHUNK_SIZE, 100, 10_000, 1000),
    range(StrategyKind::FixedSize, param::OVERLAP, 0, 1000, 0),
    range(StrategyKind::SlidingWindow, param::WINDOW_SIZE, 100, 10_000, 1000),
    range(StrategyKind::SlidingWindow, param::STRIDE, 50, 5000, 500),
    range(StrategyKind::SentenceBased, param::MAX_SENTENCES, 1, 50, 5),
    range(StrategyKind::SentenceBased, param::MIN_SENTENCES, 1, 10, 1),
    range(StrategyKind::Recursive, param::MAX_CHUNK_SIZE, 100, 10_000, 2000),
    range(StrategyKind::Recursive, param::MIN_CHUNK_SIZE, 50, 1000, 100),
];

/// Ranges for the parameters of one strategy, in declaration order.
pub fn parameter_ranges(kind: StrategyKind) -> impl Iterator<Item = &'static ParameterRange> {
    PARAMETER_RANGES.iter().filter(move |r| r.strategy == kind)
}

fn check_range(kind: StrategyKind, parameter: &str, value: usize) -> Result<()> {
    if let Some(r) = parameter_ranges(kind).find(|r| r.parameter == parameter)
        && !(r.min..=r.max).contains(&value)
    {
        return Err(ChunkingError::OutOfRange {
            parameter: parameter.to_string(),
            value,
            min: r.min,
            max: r.max,
        }
        .into());
    }
    Ok(())
}

fn default_for(kind: StrategyKind, parameter: &str) -> usize {
    parameter_ranges(kind)
        .find(|r| r.parameter == parameter)
        .map_or(0, |r| r.default)
}

fn invalid(reason: &str) -> crate::error::Error {
    ChunkingError::InvalidConfig {
        reason: reason.to_string(),
    }
    .into()
}

/// Configuration for [`FixedSizeChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSizeConfig {
    /// Characters per chunk.
    pub chunk_size: usize,
    /// Characters repeated at the start of the next chunk.
    pub overlap: usize,
}

impl Default for FixedSizeConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 0,
        }
    }
}

impl FixedSizeConfig {
    /// Checks that the window advances on every step.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero or `overlap >= chunk_size`.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(invalid("chunk_size must be > 0"));
        }
        if self.overlap >= self.chunk_size {
            return Err(ChunkingError::OverlapTooLarge {
                overlap: self.overlap,
                size: self.chunk_size,
            }
            .into());
        }
        Ok(())
    }

    /// Parameter values as a map.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::from([
            (param::CHUNK_SIZE.to_string(), self.chunk_size),
            (param::OVERLAP.to_string(), self.overlap),
        ])
    }
}

/// Configuration for [`SlidingWindowChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingWindowConfig {
    /// Characters per window.
    pub window_size: usize,
    /// Characters the window advances between chunks.
    pub stride: usize,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self {
            window_size: 1000,
            stride: 500,
        }
    }
}

impl SlidingWindowConfig {
    /// Overlap between consecutive windows.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.window_size.saturating_sub(self.stride)
    }

    /// Checks that windows advance and cover the document contiguously.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero or `stride > window_size`.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(invalid("window_size must be > 0"));
        }
        if self.stride == 0 {
            return Err(invalid("stride must be > 0"));
        }
        if self.stride > self.window_size {
            return Err(ChunkingError::StrideTooLarge {
                stride: self.stride,
                window: self.window_size,
            }
            .into());
        }
        Ok(())
    }

    /// Parameter values as a map.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::from([
            (param::WINDOW_SIZE.to_string(), self.window_size),
            (param::STRIDE.to_string(), self.stride),
        ])
    }
}

/// Configuration for [`SentenceBasedChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceConfig {
    /// Sentences that trigger a flush.
    pub max_sentences: usize,
    /// Sentences required before the last sentence may flush a group.
    pub min_sentences: usize,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            max_sentences: 5,
            min_sentences: 1,
        }
    }
}

impl SentenceConfig {
    /// # Errors
    ///
    /// Returns an error if either bound is zero or `min_sentences > max_sentences`.
    pub fn validate(&self) -> Result<()> {
        if self.max_sentences == 0 {
            return Err(invalid("max_sentences must be >= 1"));
        }
        if self.min_sentences == 0 {
            return Err(invalid("min_sentences must be >= 1"));
        }
        if self.min_sentences > self.max_sentences {
            return Err(invalid("min_sentences must not exceed max_sentences"));
        }
        Ok(())
    }

    /// Parameter values as a map.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::from([
            (param::MAX_SENTENCES.to_string(), self.max_sentences),
            (param::MIN_SENTENCES.to_string(), self.min_sentences),
        ])
    }
}

/// Configuration for [`RecursiveChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursiveConfig {
    /// Spans longer than this are split.
    pub max_chunk_size: usize,
    /// Spans shorter than this are discarded.
    pub min_chunk_size: usize,
}

impl Default for RecursiveConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 2000,
            min_chunk_size: 100,
        }
    }
}

impl RecursiveConfig {
    /// # Errors
    ///
    /// Returns an error if either bound is zero or `min_chunk_size >= max_chunk_size`.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(invalid("max_chunk_size must be > 0"));
        }
        if self.min_chunk_size == 0 {
            return Err(invalid("min_chunk_size must be > 0"));
        }
        if self.min_chunk_size >= self.max_chunk_size {
            return Err(invalid("min_chunk_size must be less than max_chunk_size"));
        }
        Ok(())
    }

    /// Parameter values as a map.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        Parameters::from([
            (param::MAX_CHUNK_SIZE.to_string(), self.max_chunk_size),
            (param::MIN_CHUNK_SIZE.to_string(), self.min_chunk_size),
        ])
    }
}

/// Configuration of any registered strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Fixed-size chunking.
    FixedSize(FixedSizeConfig),
    /// Sliding window chunking.
    SlidingWindow(SlidingWindowConfig),
    /// Sentence grouping.
    SentenceBased(SentenceConfig),
    /// Recursive structural splitting.
    Recursive(RecursiveConfig),
}

impl StrategyConfig {
    /// Default configuration for a strategy.
    #[must_use]
    pub fn default_for(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::FixedSize => Self::FixedSize(FixedSizeConfig::default()),
            StrategyKind::SlidingWindow => Self::SlidingWindow(SlidingWindowConfig::default()),
            StrategyKind::SentenceBased => Self::SentenceBased(SentenceConfig::default()),
            StrategyKind::Recursive => Self::Recursive(RecursiveConfig::default()),
        }
    }

    /// Builds a configuration from a parameter map.
    ///
    /// Missing parameters take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::UnknownParameter`] for a key the strategy
    /// does not accept.
    pub fn from_parameters(kind: StrategyKind, params: &Parameters) -> Result<Self> {
        if let Some(unknown) = params
            .keys()
            .find(|key| !parameter_ranges(kind).any(|r| r.parameter == key.as_str()))
        {
            return Err(ChunkingError::UnknownParameter {
                strategy: kind.name().to_string(),
                parameter: unknown.clone(),
            }
            .into());
        }

        let get = |name: &str| {
            params
                .get(name)
                .copied()
                .unwrap_or_else(|| default_for(kind, name))
        };

        Ok(match kind {
            StrategyKind::FixedSize => Self::FixedSize(FixedSizeConfig {
                chunk_size: get(param::CHUNK_SIZE),
                overlap: get(param::OVERLAP),
            }),
            StrategyKind::SlidingWindow => Self::SlidingWindow(SlidingWindowConfig {
                window_size: get(param::WINDOW_SIZE),
                stride: get(param::STRIDE),
            }),
            StrategyKind::SentenceBased => Self::SentenceBased(SentenceConfig {
                max_sentences: get(param::MAX_SENTENCES),
                min_sentences: get(param::MIN_SENTENCES),
            }),
            StrategyKind::Recursive => Self::Recursive(RecursiveConfig {
                max_chunk_size: get(param::MAX_CHUNK_SIZE),
                min_chunk_size: get(param::MIN_CHUNK_SIZE),
            }),
        })
    }

    /// The strategy this configuration belongs to.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::FixedSize(_) => StrategyKind::FixedSize,
            Self::SlidingWindow(_) => StrategyKind::SlidingWindow,
            Self::SentenceBased(_) => StrategyKind::SentenceBased,
            Self::Recursive(_) => StrategyKind::Recursive,
        }
    }

    /// Parameter values as a map.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        match self {
            Self::FixedSize(c) => c.parameters(),
            Self::SlidingWindow(c) => c.parameters(),
            Self::SentenceBased(c) => c.parameters(),
            Self::Recursive(c) => c.parameters(),
        }
    }

    /// Checks every parameter against [`PARAMETER_RANGES`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::OutOfRange`] for the first parameter outside
    /// its documented range.
    pub fn check_ranges(&self) -> Result<()> {
        let kind = self.kind();
        for (name, value) in self.parameters() {
            check_range(kind, &name, value)?;
        }
        Ok(())
    }

    /// Validates the configuration and instantiates the strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot make progress.
    pub fn build(&self) -> Result<Box<dyn Chunker>> {
        Ok(match *self {
            Self::FixedSize(c) => Box::new(FixedSizeChunker::new(c)?),
            Self::SlidingWindow(c) => Box::new(SlidingWindowChunker::new(c)?),
            Self::SentenceBased(c) => Box::new(SentenceBasedChunker::new(c)?),
            Self::Recursive(c) => Box::new(RecursiveChunker::new(c)?),
        })
    }
}
