//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use rechunk_api::{Chunk, Metadata};
use std::io::Write;

/// Plain text formatter - a header line, then the chunk verbatim
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()> {
        writeln!(self.writer, "--- {} chunk {} ---", source, chunk.index)?;
        writeln!(self.writer, "{}", chunk.text)?;
        Ok(())
    }

    fn source_metadata(&mut self, source: &str, metadata: &Metadata) -> Result<()> {
        if self.include_metadata {
            writeln!(
                self.writer,
                "# {}: {} chunk(s), {} chars, longest {} chars, {} oversized",
                source,
                metadata.chunk_count,
                metadata.total_chars,
                metadata.max_chunk_chars,
                metadata.oversized_chunks
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{chunk, SharedBuffer};

    #[test]
    fn test_text_output() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), false);

        formatter.format_chunk("a.txt", &chunk(0, "hello world", 0, 0)).unwrap();
        formatter.format_chunk("a.txt", &chunk(1, "rld again", 8, 3)).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            buffer.contents(),
            "--- a.txt chunk 0 ---\nhello world\n--- a.txt chunk 1 ---\nrld again\n"
        );
    }

    #[test]
    fn test_metadata_only_when_enabled() {
        let chunks = vec![chunk(0, "abc", 0, 0)];
        let metadata = Metadata::new("abc", &chunks, 10, 0);

        let quiet = SharedBuffer::default();
        TextFormatter::new(quiet.clone(), false)
            .source_metadata("a.txt", &metadata)
            .unwrap();
        assert!(quiet.contents().is_empty());

        let verbose = SharedBuffer::default();
        TextFormatter::new(verbose.clone(), true)
            .source_metadata("a.txt", &metadata)
            .unwrap();
        assert!(verbose.contents().starts_with("# a.txt: 1 chunk(s), 3 chars"));
    }
}
