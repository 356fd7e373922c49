//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use rechunk_api::{Chunk, Metadata};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
///
/// With metadata enabled the array is wrapped in an object that also lists
/// per-source statistics.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_metadata: bool,
    chunks: Vec<ChunkRecord>,
    sources: Vec<SourceRecord>,
}

/// A chunk tagged with its source
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Source name
    pub source: String,
    /// Chunk data
    #[serde(flatten)]
    pub chunk: Chunk,
}

/// Statistics for one source
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Source name
    pub source: String,
    /// Chunking statistics
    pub metadata: Metadata,
}

#[derive(Serialize)]
struct Document<'a> {
    chunks: &'a [ChunkRecord],
    sources: &'a [SourceRecord],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, include_metadata: bool) -> Self {
        Self {
            writer,
            pretty,
            include_metadata,
            chunks: Vec::new(),
            sources: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()> {
        self.chunks.push(ChunkRecord {
            source: source.to_string(),
            chunk: chunk.clone(),
        });
        Ok(())
    }

    fn source_metadata(&mut self, source: &str, metadata: &Metadata) -> Result<()> {
        self.sources.push(SourceRecord {
            source: source.to_string(),
            metadata: metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let chunks = std::mem::take(&mut self.chunks);
        if self.include_metadata {
            let sources = std::mem::take(&mut self.sources);
            self.write_value(&Document {
                chunks: &chunks,
                sources: &sources,
            })?;
        } else {
            self.write_value(&chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
