//! CLI layer for chunkwise.
//!
//! Provides the command-line interface using clap, with commands for
//! listing, describing and running chunking strategies.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, StrategyArgs};
