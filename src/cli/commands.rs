//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::chunking::{
    Chunker, ParallelChunker, Parameters, StrategyConfig, StrategyKind, describe_all,
};
use crate::cli::output::{
    ChunkStats, ChunkedDocument, OutputFormat, format_chunks, format_metadata, format_stats,
    format_strategy_list,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::io::read_document;
use crate::io::reader::STDIN_PATH;
use std::path::PathBuf;
use tracing::{debug, info};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format)?;

    match &cli.command {
        Commands::Strategies => Ok(cmd_strategies(format)),
        Commands::Describe { strategy, params } => {
            cmd_describe(strategy, &params.to_parameters(), format)
        }
        Commands::Chunk {
            files,
            strategy,
            params,
            stats,
        } => cmd_chunk(files, strategy, &params.to_parameters(), *stats, format),
    }
}

/// Resolves a strategy name and parameters to a range-checked configuration.
fn resolve_config(strategy: &str, params: &Parameters) -> Result<StrategyConfig> {
    let kind: StrategyKind = strategy.parse()?;
    let config = StrategyConfig::from_parameters(kind, params)?;
    config.check_ranges()?;
    debug!(strategy = kind.name(), ?params, "resolved strategy configuration");
    Ok(config)
}

fn cmd_strategies(format: OutputFormat) -> String {
    format_strategy_list(&describe_all(), format)
}

fn cmd_describe(strategy: &str, params: &Parameters, format: OutputFormat) -> Result<String> {
    let chunker = resolve_config(strategy, params)?.build()?;
    Ok(format_metadata(&chunker.describe(), format))
}

fn cmd_chunk(
    files: &[PathBuf],
    strategy: &str,
    params: &Parameters,
    stats: bool,
    format: OutputFormat,
) -> Result<String> {
    if files.iter().filter(|f| f.as_os_str() == STDIN_PATH).count() > 1 {
        return Err(CommandError::InvalidArgument(
            "standard input (-) can only be read once".to_string(),
        )
        .into());
    }
    let chunker = ParallelChunker::new(resolve_config(strategy, params)?.build()?);

    let texts = files
        .iter()
        .map(read_document)
        .collect::<Result<Vec<_>>>()?;
    info!(
        strategy = chunker.inner().name(),
        documents = texts.len(),
        "chunking documents"
    );

    let documents: Vec<ChunkedDocument> = files
        .iter()
        .zip(chunker.chunk_documents(&texts))
        .map(|(path, chunks)| ChunkedDocument {
            source: path.display().to_string(),
            chunks,
        })
        .collect();

    if stats {
        let summary = ChunkStats::from_chunks(documents.iter().flat_map(|d| &d.chunks));
        return Ok(format_stats(chunker.inner().name(), &summary, format));
    }
    Ok(format_chunks(&documents, format))
}
