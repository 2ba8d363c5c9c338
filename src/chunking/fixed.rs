//! Fixed-size chunking strategy.
//!
//! Splits text into constant-length character windows with an optional
//! trailing overlap. Offsets count characters, so multi-byte text is never
//! split inside a code point.

use crate::chunking::config::FixedSizeConfig;
use crate::chunking::traits::{Chunker, Parameters};
use crate::chunking::StrategyKind;
use crate::core::Chunk;
use crate::error::Result;
use crate::io::CharIndex;
use tracing::debug;

/// Fixed-size chunker.
///
/// Each chunk spans `[start, min(start + chunk_size, len))`; the next chunk
/// starts `overlap` characters before the previous one ended. The last
/// chunk is the one that reaches the end of the document.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, FixedSizeChunker};
///
/// let chunker = FixedSizeChunker::with_size_and_overlap(10, 2).unwrap();
/// let chunks = chunker.chunk_text("Hello world! How are you?");
/// let texts: Vec<_> = chunks.iter().map(|c| c.text()).collect();
/// assert_eq!(texts, ["Hello worl", "rld! How a", " are you?"]);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    config: FixedSizeConfig,
}

impl FixedSizeChunker {
    /// Creates a fixed-size chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero or `overlap >= chunk_size`,
    /// either of which would stop the window from advancing.
    pub fn new(config: FixedSizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a fixed-size chunker with no overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero.
    pub fn with_size(chunk_size: usize) -> Result<Self> {
        Self::with_size_and_overlap(chunk_size, 0)
    }

    /// Creates a fixed-size chunker with custom size and overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if the window would not advance.
    pub fn with_size_and_overlap(chunk_size: usize, overlap: usize) -> Result<Self> {
        Self::new(FixedSizeConfig {
            chunk_size,
            overlap,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FixedSizeConfig {
        &self.config
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let FixedSizeConfig {
            chunk_size,
            overlap,
        } = self.config;
        let index = CharIndex::new(text);
        let total = index.char_len();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < total {
            let end = (start + chunk_size).min(total);
            let chunk = Chunk::new(index.slice(start, end).to_string(), start)
                .with_overlap(overlap.min(start), overlap.min(total - end));
            chunks.push(chunk);

            if end >= total {
                break;
            }
            // overlap < chunk_size, so this always moves forward
            start = end - overlap;
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
        StrategyKind::FixedSize.name()
    }

    fn display_name(&self) -> &'static str {
        StrategyKind::FixedSize.display_name()
    }

    fn description(&self) -> &'static str {
        "Splits text into chunks of fixed character length with optional overlap between chunks."
    }

    fn pros(&self) -> &'static [&'static str] {
        &[
            "Simple and predictable chunk sizes",
            "Consistent memory usage",
            "Easy to implement and maintain",
            "Good for uniform text distribution",
        ]
    }

    fn cons(&self) -> &'static [&'static str] {
        &[
            "May split sentences or logical units",
            "Not context-aware",
            "Can create awkward breaks in text",
            "May not preserve semantic meaning",
        ]
    }

    fn use_cases(&self) -> &'static [&'static str] {
        &[
            "Processing large documents with uniform content",
            "When consistent chunk sizes are required",
            "Simple text splitting without semantic requirements",
            "Memory-constrained environments",
        ]
    }

    fn parameters(&self) -> Parameters {
        self.config.parameters()
    }
}
