//! Sentence-based chunking strategy.
//!
//! Groups detected sentences into chunks of at most `max_sentences`,
//! joining the sentences of a group with single spaces. Because the text is
//! reconstructed, offsets are synthetic: each chunk starts one character
//! after the previous one ended.

use crate::chunking::config::SentenceConfig;
use crate::chunking::sentences::{SentenceSplitter, UnicodeSentenceSplitter};
use crate::chunking::traits::{Chunker, Parameters};
use crate::chunking::StrategyKind;
use crate::core::Chunk;
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, trace};

/// Sentence-grouping chunker.
///
/// A group is flushed when it reaches `max_sentences`, or at the last
/// sentence once it holds at least `min_sentences`. A trailing group below
/// the minimum is still flushed, so no sentence is ever dropped.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, SentenceBasedChunker};
///
/// let chunker = SentenceBasedChunker::with_sentences(2, 1).unwrap();
/// let chunks = chunker.chunk_text("Hello world! How are you? I am good. Thanks!");
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text(), "Hello world! How are you?");
/// assert_eq!(chunks[1].text(), "I am good. Thanks!");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceBasedChunker {
    config: SentenceConfig,
    splitter: Arc<dyn SentenceSplitter>,
}

impl SentenceBasedChunker {
    /// Creates a sentence chunker using Unicode sentence boundaries.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is zero or `min_sentences > max_sentences`.
    pub fn new(config: SentenceConfig) -> Result<Self> {
        Self::with_splitter(config, UnicodeSentenceSplitter)
    }

    /// Creates a sentence chunker from sentence bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn with_sentences(max_sentences: usize, min_sentences: usize) -> Result<Self> {
        Self::new(SentenceConfig {
            max_sentences,
            min_sentences,
        })
    }

    /// Creates a sentence chunker with a custom sentence detector.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn with_splitter<S: SentenceSplitter + 'static>(
        config: SentenceConfig,
        splitter: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            splitter: Arc::new(splitter),
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SentenceConfig {
        &self.config
    }
}

/// Emits the pending group as one chunk and advances the synthetic offset.
fn flush(group: &mut Vec<&str>, next_start: &mut usize, chunks: &mut Vec<Chunk>) {
    let chunk = Chunk::new(group.join(" "), *next_start);
    // +1 for the space that would join this chunk to the next
    *next_start = chunk.end_char() + 1;
    chunks.push(chunk);
    group.clear();
}

impl Chunker for SentenceBasedChunker {
    fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let SentenceConfig {
            max_sentences,
            min_sentences,
        } = self.config;
        let sentences = self.splitter.split(text);
        let last = sentences.len().saturating_sub(1);

        let mut chunks = Vec::new();
        let mut group = Vec::with_capacity(max_sentences);
        let mut next_start = 0;

        for (i, sentence) in sentences.iter().enumerate() {
            group.push(*sentence);
            if group.len() >= max_sentences || (i == last && group.len() >= min_sentences) {
                flush(&mut group, &mut next_start, &mut chunks);
            }
        }

        if !group.is_empty() {
            trace!(
                sentences = group.len(),
                min_sentences, "flushing final group below minimum"
            );
            flush(&mut group, &mut next_start, &mut chunks);
        }

        debug!(
            strategy = self.name(),
            sentences = sentences.len(),
            chunks = chunks.len(),
            "chunked text"
        );
        chunks
    }

    fn name(&self) -> &'static str {
        StrategyKind::SentenceBased.name()
    }

    fn display_name(&self) -> &'static str {
        StrategyKind::SentenceBased.display_name()
    }

    fn description(&self) -> &'static str {
        "Splits text into chunks based on sentence boundaries, maintaining semantic coherence."
    }

    fn pros(&self) -> &'static [&'static str] {
        &[
            "Preserves sentence integrity",
            "Maintains semantic meaning",
            "Natural text boundaries",
            "Better for downstream NLP tasks",
        ]
    }

    fn cons(&self) -> &'static [&'static str] {
        &[
            "Variable chunk sizes",
            "May create very large chunks with long sentences",
            "Dependent on sentence detection quality",
            "May struggle with informal text or unusual punctuation",
        ]
    }

    fn use_cases(&self) -> &'static [&'static str] {
        &[
            "Processing formal documents",
            "When semantic coherence is important",
            "Question-answering systems",
            "Summarization tasks",
        ]
    }

    fn parameters(&self) -> Parameters {
        self.config.parameters()
    }
}
