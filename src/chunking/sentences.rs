//! Sentence boundary detection.
//!
//! [`SentenceBasedChunker`](crate::chunking::SentenceBasedChunker) only needs
//! an ordered list of non-overlapping sentences covering the input, so the
//! detector is a swappable capability.

use crate::error::{ChunkingError, Result};
use regex::Regex;
use std::fmt::Debug;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences.
///
/// Returned sentences are trimmed, non-empty, in document order, and
/// borrowed from the input. Consecutive sentences must be separated by
/// whitespace in the input, so joining them with single spaces never yields
/// more characters than the input holds.
pub trait SentenceSplitter: Send + Sync + Debug {
    /// Splits `text` into sentences.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Sentence detection following the Unicode text segmentation rules (UAX #29).
///
/// Boundaries that are not followed by whitespace (`"Hi!Bye!"`) are ignored.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{SentenceSplitter, UnicodeSentenceSplitter};
///
/// let sentences = UnicodeSentenceSplitter.split("Hello world! How are you?");
/// assert_eq!(sentences, ["Hello world!", "How are you?"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let cuts = text
            .split_sentence_bound_indices()
            .map(|(offset, piece)| offset + piece.len());
        split_at_cuts(text, cuts)
    }
}

/// Sentence detection on terminal punctuation followed by whitespace.
///
/// Cheaper than [`UnicodeSentenceSplitter`] and does not break on line
/// endings alone. A custom terminator pattern can replace the default; each
/// match ending in whitespace ends a sentence.
#[derive(Debug, Clone, Default)]
pub struct RegexSentenceSplitter {
    terminator: Option<Regex>,
}

impl RegexSentenceSplitter {
    /// Creates a splitter using the default terminator pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self { terminator: None }
    }

    /// Creates a splitter that ends a sentence after matches of `pattern`.
    ///
    /// Matches that do not end in whitespace are not sentence ends.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::Regex`] if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let terminator = Regex::new(pattern).map_err(ChunkingError::from)?;
        Ok(Self {
            terminator: Some(terminator),
        })
    }

    #[allow(clippy::expect_used)]
    fn default_terminator() -> &'static Regex {
        static TERMINATOR: OnceLock<Regex> = OnceLock::new();
        TERMINATOR.get_or_init(|| {
            Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*\s+"#).expect("valid regex")
        })
    }

    fn terminator(&self) -> &Regex {
        self.terminator
            .as_ref()
            .unwrap_or_else(|| Self::default_terminator())
    }
}

impl SentenceSplitter for RegexSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_at_cuts(text, self.terminator().find_iter(text).map(|m| m.end()))
    }
}

/// Cuts `text` at the ascending byte offsets in `cuts` that directly follow
/// whitespace, returning the trimmed non-empty pieces.
fn split_at_cuts<'a>(text: &'a str, cuts: impl IntoIterator<Item = usize>) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for cut in cuts {
        if cut > last && text[..cut].ends_with(char::is_whitespace) {
            sentences.push(text[last..cut].trim());
            last = cut;
        }
    }
    sentences.push(text[last..].trim());

    sentences.retain(|s| !s.is_empty());
    sentences
}
