//! Recursive text chunking with overlap
//!
//! Text is split into chunks of at most `chunk_size` characters using an
//! ordered list of separators, descending to finer separators when a piece
//! does not fit. Consecutive chunks share up to `chunk_overlap` characters.
//!
//! ```
//! use rechunk_api::{ChunkConfig, TextChunker};
//!
//! let config = ChunkConfig::builder()
//!     .chunk_size(12)
//!     .chunk_overlap(4)
//!     .build()?;
//! let chunker = TextChunker::with_config(config)?;
//!
//! let chunks = chunker.chunk("The quick brown fox jumps over the lazy dog");
//! assert!(chunks.len() > 1);
//! # Ok::<(), rechunk_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod splitter;

use error::Result;

// Re-export key types
pub use config::{ChunkConfig, ConfigBuilder};
pub use dto::{reconstruct, Chunk, Input, Metadata, Output};
pub use error::ApiError;
pub use splitter::split;

/// Main entry point for chunking
///
/// Holds a validated configuration; cheap to clone and safe to share
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct TextChunker {
    config: ChunkConfig,
}

impl TextChunker {
    /// Create a chunker with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Split text into chunk strings
    pub fn chunk(&self, text: &str) -> Vec<String> {
        split(text, &self.config)
    }

    /// Read the input and split it into positioned chunks
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let chunks = dto::position_segments(splitter::split_segments(&text, &self.config));

        let elapsed = start.elapsed();
        let metadata = Metadata::new(
            &text,
            &chunks,
            self.config.chunk_size,
            elapsed.as_millis() as u64,
        );

        log::debug!(
            "chunked {} chars into {} chunk(s), {} oversized",
            metadata.total_chars,
            metadata.chunk_count,
            metadata.oversized_chunks
        );

        Ok(Output { chunks, metadata })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }
}

// Convenience functions

/// Validate `config` and split `text`
pub fn chunk(text: &str, config: &ChunkConfig) -> Result<Vec<String>> {
    config.validate()?;
    Ok(split(text, config))
}

/// Split text with the default configuration
pub fn chunk_text(text: &str) -> Vec<String> {
    TextChunker::new().chunk(text)
}

/// Process text with the default configuration
pub fn process_text(text: &str) -> Result<Output> {
    TextChunker::new().process_text(text)
}

/// Process a file with the default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    TextChunker::new().process(Input::from_file(path.as_ref().to_path_buf()))
}
