//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use rechunk_api::Chunk;
use std::io::Write;

/// Markdown formatter - one section per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()> {
        self.chunk_count += 1;
        writeln!(self.writer, "## Chunk {} (`{}`)", self.chunk_count, source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
