//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::chunking::Parameters;
use crate::chunking::config::param;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chunkwise: split documents into chunks for retrieval and indexing.
///
/// Chunks text with one of several strategies and prints the result as a
/// table, JSON or CSV.
#[derive(Parser, Debug)]
#[command(name = "chunkwise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json, csv).
    #[arg(long, default_value = "text", env = "CHUNKWISE_FORMAT", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available chunking strategies.
    #[command(alias = "ls")]
    Strategies,

    /// Show the description, trade-offs and parameters of a strategy.
    Describe {
        /// Strategy name (fixed_size, sliding_window, sentence_based, recursive).
        strategy: String,

        /// Parameter overrides.
        #[command(flatten)]
        params: StrategyArgs,
    },

    /// Chunk one or more documents.
    Chunk {
        /// Input files; `-` reads standard input.
        #[arg(default_value = "-")]
        files: Vec<PathBuf>,

        /// Chunking strategy.
        #[arg(short, long, default_value = "fixed_size", env = "CHUNKWISE_STRATEGY")]
        strategy: String,

        /// Parameter overrides.
        #[command(flatten)]
        params: StrategyArgs,

        /// Print summary statistics instead of the chunks.
        #[arg(long)]
        stats: bool,
    },
}

/// Strategy parameter flags.
///
/// Only flags that are given become parameters; the rest take the
/// strategy's defaults. A flag the chosen strategy does not accept is an
/// error.
#[derive(Args, Debug, Clone, Default)]
pub struct StrategyArgs {
    /// Characters per chunk (fixed_size).
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Characters shared with the next chunk (fixed_size).
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Characters per window (sliding_window).
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Characters the window advances (sliding_window).
    #[arg(long)]
    pub stride: Option<usize>,

    /// Maximum sentences per chunk (sentence_based).
    #[arg(long)]
    pub max_sentences: Option<usize>,

    /// Minimum sentences per chunk (sentence_based).
    #[arg(long)]
    pub min_sentences: Option<usize>,

    /// Maximum chunk length (recursive).
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Minimum chunk length (recursive).
    #[arg(long)]
    pub min_chunk_size: Option<usize>,
}

impl StrategyArgs {
    /// Collects the supplied flags into a parameter map.
    #[must_use]
    pub fn to_parameters(&self) -> Parameters {
        [
            (param::CHUNK_SIZE, self.chunk_size),
            (param::OVERLAP, self.overlap),
            (param::WINDOW_SIZE, self.window_size),
            (param::STRIDE, self.stride),
            (param::MAX_SENTENCES, self.max_sentences),
            (param::MIN_SENTENCES, self.min_sentences),
            (param::MAX_CHUNK_SIZE, self.max_chunk_size),
            (param::MIN_CHUNK_SIZE, self.min_chunk_size),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
    }
}
