//! I/O utilities.
//!
//! Document loading for the CLI (with memory mapping for large files) and
//! the character-offset index the chunking strategies slice with.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, read_document, read_file, read_from};
pub use unicode::CharIndex;
