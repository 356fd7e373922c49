//! Output formatting module

use anyhow::Result;
use rechunk_api::{Chunk, Metadata};
use std::io::Write;

use crate::config::OutputConfig;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk of `source`
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()>;

    /// Record statistics for a finished source
    fn source_metadata(&mut self, _source: &str, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with a header line before each chunk
    Text,
    /// JSON array of chunks with offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, config.include_metadata)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            config.pretty_json,
            config.include_metadata,
        )),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
