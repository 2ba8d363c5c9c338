//! Chunk representation.
//!
//! A chunk is one segment of a document produced by a chunking strategy,
//! carrying its character offsets and the overlap it shares with its
//! neighbours. Offsets and lengths are counted in Unicode scalar values
//! (`char`s), not bytes.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use uuid::Uuid;

/// One text segment with position and overlap metadata.
///
/// Chunks are immutable once built: the constructor derives `end_char`
/// and `length` from the text, so `length == end_char - start_char`
/// always holds.
///
/// # Examples
///
/// ```
/// use chunkwise::core::Chunk;
///
/// let chunk = Chunk::new("Hello, world!".to_string(), 7);
/// assert_eq!(chunk.length(), 13);
/// assert_eq!(chunk.end_char(), 20);
/// assert_eq!(chunk.overlap_prev(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    id: String,
    text: String,
    #[serde(alias = "start_position")]
    start_char: usize,
    #[serde(alias = "end_position")]
    end_char: usize,
    length: usize,
    #[serde(default, alias = "overlap_previous")]
    overlap_prev: usize,
    #[serde(default)]
    overlap_next: usize,
}

impl Chunk {
    /// Creates a chunk starting at `start_char` with no overlap.
    ///
    /// A fresh random identifier is assigned.
    #[must_use]
    pub fn new(text: String, start_char: usize) -> Self {
        let length = text.chars().count();
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            start_char,
            end_char: start_char + length,
            length,
            overlap_prev: 0,
            overlap_next: 0,
        }
    }

    /// Sets the overlap shared with the previous and next chunks.
    #[must_use]
    pub const fn with_overlap(mut self, overlap_prev: usize, overlap_next: usize) -> Self {
        self.overlap_prev = overlap_prev;
        self.overlap_next = overlap_next;
        self
    }

    /// Opaque identifier, unique per chunk.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Chunk content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start offset (inclusive), in characters.
    #[must_use]
    pub const fn start_char(&self) -> usize {
        self.start_char
    }

    /// End offset (exclusive), in characters.
    #[must_use]
    pub const fn end_char(&self) -> usize {
        self.end_char
    }

    /// Number of characters in the chunk.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Characters shared with the preceding chunk.
    #[must_use]
    pub const fn overlap_prev(&self) -> usize {
        self.overlap_prev
    }

    /// Characters shared with the following chunk.
    #[must_use]
    pub const fn overlap_next(&self) -> usize {
        self.overlap_next
    }

    /// Character range covered in the document.
    #[must_use]
    pub const fn char_range(&self) -> Range<usize> {
        self.start_char..self.end_char
    }

    /// Checks if the chunk is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the first `max_chars` characters of the content.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}
