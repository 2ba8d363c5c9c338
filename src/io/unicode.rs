//! Unicode utilities for character-offset arithmetic.
//!
//! Chunk offsets are counted in `char`s while Rust strings are indexed by
//! byte. [`CharIndex`] precomputes the byte position of every character so
//! strategies can slice by character offset in constant time.

/// Byte positions of every character boundary in a string.
///
/// # Examples
///
/// ```
/// use chunkwise::io::CharIndex;
///
/// let text = "Hello 世界!";
/// let index = CharIndex::new(text);
/// assert_eq!(index.char_len(), 9);
/// assert_eq!(index.slice(6, 8), "世界");
/// assert_eq!(index.char_offset(9), 7);
/// ```
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    /// `boundaries[i]` is the byte offset of char `i`; the last entry is `text.len()`.
    boundaries: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    /// Builds the index for `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// The indexed text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Number of characters in the text.
    #[must_use]
    pub const fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Byte offset of character `char_pos`, clamped to the text length.
    #[must_use]
    pub fn byte_offset(&self, char_pos: usize) -> usize {
        self.boundaries[char_pos.min(self.char_len())]
    }

    /// Character offset of the boundary at or before `byte_pos`.
    #[must_use]
    pub fn char_offset(&self, byte_pos: usize) -> usize {
        match self.boundaries.binary_search(&byte_pos) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }

    /// Slices the text by character offsets `[start, end)`.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_index_ascii() {
        let index = CharIndex::new("abcdef");
        assert_eq!(index.char_len(), 6);
        assert_eq!(index.byte_offset(3), 3);
        assert_eq!(index.slice(1, 4), "bcd");
    }

    #[test]
    fn test_char_index_multibyte() {
        let text = "añb世c";
        let index = CharIndex::new(text);
        assert_eq!(index.char_len(), 5);
        assert_eq!(index.byte_offset(2), 3);
        assert_eq!(index.byte_offset(4), 7);
        assert_eq!(index.slice(1, 4), "ñb世");
        assert_eq!(index.char_offset(3), 2);
        assert_eq!(index.char_offset(8), 5);
    }

    #[test]
    fn test_char_index_mid_char_byte_rounds_down() {
        let index = CharIndex::new("世界");
        assert_eq!(index.char_offset(1), 0);
        assert_eq!(index.char_offset(4), 1);
    }

    #[test]
    fn test_char_index_empty() {
        let index = CharIndex::new("");
        assert_eq!(index.char_len(), 0);
        assert_eq!(index.slice(0, 0), "");
        assert_eq!(index.byte_offset(5), 0);
    }

    #[test]
    fn test_char_index_clamps() {
        let index = CharIndex::new("abc");
        assert_eq!(index.slice(2, 99), "c");
    }
}
