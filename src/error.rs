//! Error types for chunkwise operations.
//!
//! This module provides the error hierarchy using `thiserror` for strategy
//! construction, registry lookups, document loading, and CLI commands.
//! Chunking itself never fails once a strategy has been constructed.

use thiserror::Error;

/// Result type alias for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking-related errors (strategy configuration and lookup).
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// I/O errors (document loading).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors outside a single strategy.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while building or looking up a chunking strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    /// Invalid chunk configuration.
    #[error("invalid chunk configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Overlap would keep the fixed-size window from advancing.
    #[error("overlap {overlap} must be less than chunk size {size}")]
    OverlapTooLarge {
        /// Overlap size.
        overlap: usize,
        /// Chunk size.
        size: usize,
    },

    /// Stride larger than the window would leave gaps between windows.
    #[error("stride {stride} must not exceed window size {window}")]
    StrideTooLarge {
        /// Stride size.
        stride: usize,
        /// Window size.
        window: usize,
    },

    /// Parameter outside its documented range.
    #[error("parameter {parameter} = {value} is outside the range {min}..={max}")]
    OutOfRange {
        /// Parameter name.
        parameter: String,
        /// Supplied value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Parameter the strategy does not accept.
    #[error("strategy {strategy} has no parameter named {parameter}")]
    UnknownParameter {
        /// Strategy name.
        strategy: String,
        /// Offending parameter name.
        parameter: String,
    },

    /// Unknown chunking strategy.
    #[error("unknown chunking strategy: {name}")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
    },

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),
}

/// I/O-specific errors for document loading.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Document is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte offset {offset}")]
    InvalidUtf8 {
        /// Path to the file.
        path: String,
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<regex::Error> for ChunkingError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}
