//! Recursive structural chunking strategy.
//!
//! Spans longer than `max_chunk_size` are bisected at the most significant
//! structural boundary available (section header, paragraph break, sentence
//! end, clause punctuation, whitespace), choosing the occurrence nearest the
//! span's midpoint. Both halves are trimmed and split again until every span
//! fits. Pending spans live on an explicit stack, so very large or badly
//! unbalanced documents cannot exhaust the call stack.

use crate::chunking::config::RecursiveConfig;
use crate::chunking::traits::{Chunker, Parameters};
use crate::chunking::StrategyKind;
use crate::core::Chunk;
use crate::error::Result;
use crate::io::CharIndex;
use regex::{Match, Regex};
use std::ops::Range;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Structural boundaries, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Markdown-style section header line (`#` to `######`).
    Header,
    /// Blank line between paragraphs.
    Paragraph,
    /// `.`, `!` or `?` followed by whitespace.
    Sentence,
    /// `,`, `;` or `:` followed by whitespace.
    Clause,
    /// Any run of whitespace.
    Whitespace,
}

impl Boundary {
    /// All boundaries in order of preference.
    pub const ALL: [Self; 5] = [
        Self::Header,
        Self::Paragraph,
        Self::Sentence,
        Self::Clause,
        Self::Whitespace,
    ];

    /// Returns the compiled regex for this boundary.
    #[allow(clippy::expect_used)]
    fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::Header => static_regex!(HEADER, r"\n[ \t]*#{1,6}[ \t][^\n]*"),
            Self::Paragraph => static_regex!(PARAGRAPH, r"\n\s*\n"),
            Self::Sentence => static_regex!(SENTENCE, r"[.!?]\s+"),
            Self::Clause => static_regex!(CLAUSE, r"[,;:]\s+"),
            Self::Whitespace => static_regex!(WHITESPACE, r"\s+"),
        }
    }

    /// Byte offset, relative to the searched span, at which a match splits it.
    ///
    /// Headers split before the header line so the header stays with its
    /// section; every other boundary splits after the delimiter.
    fn split_offset(self, m: &Match<'_>) -> usize {
        match self {
            Self::Header => m.start() + 1,
            _ => m.end(),
        }
    }
}

/// Recursive structure-aware chunker.
///
/// Spans shorter than `min_chunk_size` after trimming are discarded, so
/// very short inputs can produce no chunks. Every emitted chunk is a
/// verbatim slice of the document at its reported offsets.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, RecursiveChunker};
///
/// let text = "# Section 1\nFirst paragraph here.\n\n# Section 2\nSecond paragraph.";
/// let chunker = RecursiveChunker::with_bounds(40, 10).unwrap();
/// let chunks = chunker.chunk_text(text);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text(), "# Section 1\nFirst paragraph here.");
/// assert_eq!(chunks[1].text(), "# Section 2\nSecond paragraph.");
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    config: RecursiveConfig,
}

impl RecursiveChunker {
    /// Creates a recursive chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is zero or `min_chunk_size >= max_chunk_size`.
    pub fn new(config: RecursiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a recursive chunker from size bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn with_bounds(max_chunk_size: usize, min_chunk_size: usize) -> Result<Self> {
        Self::new(RecursiveConfig {
            max_chunk_size,
            min_chunk_size,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RecursiveConfig {
        &self.config
    }

    /// Finds where to split `span` (document bytes), returned as a document byte offset.
    ///
    /// The result always lies strictly inside the span.
    fn find_split(index: &CharIndex<'_>, span: Range<usize>) -> usize {
        let text = &index.text()[span.clone()];
        let char_start = index.char_offset(span.start);
        let char_len = index.char_offset(span.end) - char_start;

        for boundary in Boundary::ALL {
            let best = boundary
                .regex()
                .find_iter(text)
                .map(|m| boundary.split_offset(&m))
                .filter(|&pos| pos > 0 && pos < text.len())
                // Ties keep the leftmost candidate.
                .min_by_key(|&pos| {
                    let chars_before = index.char_offset(span.start + pos) - char_start;
                    (2 * chars_before).abs_diff(char_len)
                });

            if let Some(pos) = best {
                trace!(?boundary, at = span.start + pos, "split span");
                return span.start + pos;
            }
        }

        trace!(at = char_start + char_len / 2, "no boundary found, splitting at midpoint");
        index.byte_offset(char_start + char_len / 2)
    }
}

/// Narrows a byte range of `text` to exclude leading and trailing whitespace.
fn trim_span(text: &str, span: Range<usize>) -> Range<usize> {
    let slice = &text[span.clone()];
    let start = span.start + (slice.len() - slice.trim_start().len());
    start..start + slice.trim().len()
}

impl Chunker for RecursiveChunker {
    fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let RecursiveConfig {
            max_chunk_size,
            min_chunk_size,
        } = self.config;
        let index = CharIndex::new(text);

        let mut chunks = Vec::new();
        let mut pending = vec![0..text.len()];

        while let Some(span) = pending.pop() {
            let char_start = index.char_offset(span.start);
            let char_len = index.char_offset(span.end) - char_start;

            if char_len <= max_chunk_size {
                if char_len >= min_chunk_size {
                    chunks.push(Chunk::new(text[span].to_string(), char_start));
                } else {
                    trace!(
                        start = char_start,
                        len = char_len,
                        "dropping span below minimum size"
                    );
                }
                continue;
            }

            let split = Self::find_split(&index, span.clone());
            let left = trim_span(text, span.start..split);
            let right = trim_span(text, split..span.end);

            // Right is pushed first so the left half is processed first,
            // keeping output in document order.
            if !right.is_empty() {
                pending.push(right);
            }
            if !left.is_empty() {
                pending.push(left);
            }
        }

        debug!(
            strategy = self.name(),
            chars = index.char_len(),
            chunks = chunks.len(),
            "chunked text"
        );
        chunks
    }

    fn name(&self) -> &'static str {
        StrategyKind::Recursive.name()
    }

    fn display_name(&self) -> &'static str {
        StrategyKind::Recursive.display_name()
    }

    fn description(&self) -> &'static str {
        "Recursively splits text based on document structure, respecting natural boundaries."
    }

    fn pros(&self) -> &'static [&'static str] {
        &[
            "Respects document structure",
            "Adapts to content patterns",
            "Creates more natural chunks",
            "Maintains hierarchical relationships",
        ]
    }

    fn cons(&self) -> &'static [&'static str] {
        &[
            "More complex implementation",
            "Variable chunk sizes",
            "May be slower than simpler methods",
            "Requires well-structured input text",
        ]
    }

    fn use_cases(&self) -> &'static [&'static str] {
        &[
            "Processing structured documents",
            "Technical documentation",
            "Academic papers",
            "Content with clear hierarchical structure",
        ]
    }

    fn parameters(&self) -> Parameters {
        self.config.parameters()
    }
}
