//! Output formatting for CLI commands.
//!
//! Supports text, JSON and CSV output formats.

use crate::chunking::StrategyMetadata;
use crate::core::Chunk;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
    /// Comma-separated values.
    Csv,
}

impl OutputFormat {
    /// Parses format from string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a name other than `text`, `json` or `csv`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::Config {
                message: format!("unknown output format '{s}' (expected text, json or csv)"),
            }),
        }
    }
}

/// Chunks produced from one input document.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkedDocument {
    /// Path of the document, or `-` for standard input.
    pub source: String,
    /// Chunks in document order.
    pub chunks: Vec<Chunk>,
}

/// Summary numbers over a set of chunks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkStats {
    /// Number of chunks.
    pub chunks: usize,
    /// Mean chunk length in characters.
    pub mean_length: f64,
    /// Shortest chunk length.
    pub min_length: usize,
    /// Longest chunk length.
    pub max_length: usize,
    /// Characters shared with the following chunk, summed over all chunks.
    pub total_overlap: usize,
}

impl ChunkStats {
    /// Computes statistics; all zero for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_chunks<'a>(chunks: impl IntoIterator<Item = &'a Chunk>) -> Self {
        let mut stats = Self {
            chunks: 0,
            mean_length: 0.0,
            min_length: usize::MAX,
            max_length: 0,
            total_overlap: 0,
        };
        let mut total_length = 0usize;

        for chunk in chunks {
            stats.chunks += 1;
            total_length += chunk.length();
            stats.min_length = stats.min_length.min(chunk.length());
            stats.max_length = stats.max_length.max(chunk.length());
            stats.total_overlap += chunk.overlap_next();
        }

        if stats.chunks == 0 {
            stats.min_length = 0;
        } else {
            stats.mean_length = total_length as f64 / stats.chunks as f64;
        }
        stats
    }
}

/// Formats the strategy list.
#[must_use]
pub fn format_strategy_list(strategies: &[StrategyMetadata], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Strategies:\n");
            let _ = writeln!(output, "{:<16} {:<16} Description", "Name", "Display name");
            output.push_str(&"-".repeat(70));
            output.push('\n');
            for meta in strategies {
                let _ = writeln!(
                    output,
                    "{:<16} {:<16} {}",
                    meta.name,
                    meta.display_name,
                    truncate(&meta.description, 60)
                );
            }
            output
        }
        OutputFormat::Json => format_json(&strategies),
        OutputFormat::Csv => {
            let mut output = String::from("name,display_name,description\n");
            for meta in strategies {
                let _ = writeln!(
                    output,
                    "{},{},{}",
                    csv_field(&meta.name),
                    csv_field(&meta.display_name),
                    csv_field(&meta.description)
                );
            }
            output
        }
    }
}

/// Formats the metadata of one strategy.
#[must_use]
pub fn format_metadata(meta: &StrategyMetadata, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_metadata_text(meta),
        OutputFormat::Json => format_json(meta),
        OutputFormat::Csv => {
            let mut output = String::from("parameter,value\n");
            for (name, value) in &meta.parameters {
                let _ = writeln!(output, "{},{value}", csv_field(name));
            }
            output
        }
    }
}

fn format_metadata_text(meta: &StrategyMetadata) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} ({})", meta.display_name, meta.name);
    let _ = writeln!(output, "  {}", meta.description);

    for (title, items) in [
        ("Pros", &meta.pros),
        ("Cons", &meta.cons),
        ("Use cases", &meta.use_cases),
    ] {
        output.push('\n');
        let _ = writeln!(output, "{title}:");
        for item in items {
            let _ = writeln!(output, "  - {item}");
        }
    }

    output.push('\n');
    output.push_str("Parameters:\n");
    for (name, value) in &meta.parameters {
        let _ = writeln!(output, "  {name:<16} {value}");
    }
    output
}

/// Formats chunked documents.
#[must_use]
pub fn format_chunks(documents: &[ChunkedDocument], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(documents),
        OutputFormat::Json => format_json(&documents),
        OutputFormat::Csv => chunks_to_csv(documents.iter().flat_map(|d| &d.chunks)),
    }
}

fn format_chunks_text(documents: &[ChunkedDocument]) -> String {
    let mut output = String::new();

    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "{}: {} chunks",
            document.source,
            document.chunks.len()
        );
        if document.chunks.is_empty() {
            continue;
        }

        let _ = writeln!(
            output,
            "{:<10} {:<8} {:<8} {:<8} {:<6} {:<6} Preview",
            "ID", "Length", "Start", "End", "Prev", "Next"
        );
        output.push_str(&"-".repeat(100));
        output.push('\n');

        for chunk in &document.chunks {
            let preview = chunk.preview(50).replace('\n', "\\n");
            let _ = writeln!(
                output,
                "{:<10} {:<8} {:<8} {:<8} {:<6} {:<6} {}",
                truncate(chunk.id(), 8),
                chunk.length(),
                chunk.start_char(),
                chunk.end_char(),
                chunk.overlap_prev(),
                chunk.overlap_next(),
                preview
            );
        }
    }

    output
}

/// Renders chunks as CSV with a header row.
///
/// A field is quoted only when it contains `,`, `"`, `\n` or `\r`, and
/// embedded quotes are doubled. Leading or trailing spaces alone do not
/// trigger quoting, so readers that trim unquoted fields will lose them.
#[must_use]
pub fn chunks_to_csv<'a>(chunks: impl IntoIterator<Item = &'a Chunk>) -> String {
    let mut output = String::from("id,text,start_char,end_char,length,overlap_prev,overlap_next\n");
    for chunk in chunks {
        let _ = writeln!(
            output,
            "{},{},{},{},{},{},{}",
            csv_field(chunk.id()),
            csv_field(chunk.text()),
            chunk.start_char(),
            chunk.end_char(),
            chunk.length(),
            chunk.overlap_prev(),
            chunk.overlap_next()
        );
    }
    output
}

/// Formats chunk statistics.
#[must_use]
pub fn format_stats(strategy: &str, stats: &ChunkStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Strategy:       {strategy}");
            let _ = writeln!(output, "Chunks:         {}", stats.chunks);
            let _ = writeln!(output, "Mean length:    {:.1}", stats.mean_length);
            let _ = writeln!(output, "Min length:     {}", stats.min_length);
            let _ = writeln!(output, "Max length:     {}", stats.max_length);
            let _ = writeln!(output, "Total overlap:  {}", stats.total_overlap);
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct StatsOutput<'a> {
                strategy: &'a str,
                #[serde(flatten)]
                stats: &'a ChunkStats,
            }
            format_json(&StatsOutput { strategy, stats })
        }
        OutputFormat::Csv => {
            let mut output =
                String::from("strategy,chunks,mean_length,min_length,max_length,total_overlap\n");
            let _ = writeln!(
                output,
                "{},{},{:.1},{},{},{}",
                csv_field(strategy),
                stats.chunks,
                stats.mean_length,
                stats.min_length,
                stats.max_length,
                stats.total_overlap
            );
            output
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
        OutputFormat::Text | OutputFormat::Csv => error.to_string(),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Quotes a CSV field containing `,`, `"`, `\n` or `\r`.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Truncates a string to `max_chars` characters with ellipsis.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
