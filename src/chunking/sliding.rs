//! Sliding window chunking strategy.
//!
//! Windows of `window_size` characters advance by `stride`, so neighbouring
//! windows share `window_size - stride` characters. A window starts at every
//! multiple of `stride` inside the document, and windows near the end are
//! clipped to it.

use crate::chunking::config::SlidingWindowConfig;
use crate::chunking::traits::{Chunker, Parameters};
use crate::chunking::StrategyKind;
use crate::core::Chunk;
use crate::error::Result;
use crate::io::CharIndex;
use tracing::debug;

/// Sliding window chunker.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, SlidingWindowChunker};
///
/// let chunker = SlidingWindowChunker::with_window(1000, 600).unwrap();
/// let text = "x".repeat(2500);
/// let chunks = chunker.chunk_text(&text);
/// assert_eq!(chunks[0].overlap_next(), 400);
/// assert_eq!(chunks[1].overlap_prev(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindowChunker {
    config: SlidingWindowConfig,
}

impl SlidingWindowChunker {
    /// Creates a sliding window chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero or `stride > window_size`.
    pub fn new(config: SlidingWindowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a sliding window chunker from a window size and stride.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_window(window_size: usize, stride: usize) -> Result<Self> {
        Self::new(SlidingWindowConfig {
            window_size,
            stride,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }
}

impl Chunker for SlidingWindowChunker {
    fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let SlidingWindowConfig {
            window_size,
            stride,
        } = self.config;
        let overlap = self.config.overlap();
        let index = CharIndex::new(text);
        let total = index.char_len();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < total {
            let end = (start + window_size).min(total);
            let chunk = Chunk::new(index.slice(start, end).to_string(), start)
                .with_overlap(start.min(overlap), (total - end).min(overlap));
            chunks.push(chunk);
            start += stride;
        }

        debug!(
            strategy = self.name(),
            chars = total,
            chunks = chunks.len(),
            "chunked text"
        );
        chunks
    }

    fn name(&self) -> &'static str {
        StrategyKind::SlidingWindow.name()
    }

    fn display_name(&self) -> &'static str {
        StrategyKind::SlidingWindow.display_name()
    }

    fn description(&self) -> &'static str {
        "Uses a sliding window approach with fixed stride to create overlapping chunks of text."
    }

    fn pros(&self) -> &'static [&'static str] {
        &[
            "Controlled overlap between chunks",
            "Good for capturing context around chunk boundaries",
            "Flexible stride size for different use cases",
            "Can help with context-dependent tasks",
        ]
    }

    fn cons(&self) -> &'static [&'static str] {
        &[
            "Duplicate content in overlapping regions",
            "Higher storage requirements due to overlap",
            "May still split sentences or logical units",
            "Requires careful tuning of window and stride sizes",
        ]
    }

    fn use_cases(&self) -> &'static [&'static str] {
        &[
            "Text classification with context",
            "Named entity recognition across chunk boundaries",
            "When context preservation is important",
            "Pattern detection across text segments",
        ]
    }

    fn parameters(&self) -> Parameters {
        self.config.parameters()
    }
}
