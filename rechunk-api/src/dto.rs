//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use crate::splitter::{char_len, Segment};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for chunking
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A chunk positioned in its source text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Position in the output sequence
    pub index: usize,
    /// Chunk text
    pub text: String,
    /// Character offset of the first character in the source text
    pub char_offset: usize,
    /// Length in characters
    pub char_len: usize,
    /// Leading characters shared with the previous chunk
    pub overlap: usize,
}

impl Chunk {
    /// The part of the chunk not shared with the previous one
    pub fn fresh_text(&self) -> &str {
        match self.text.char_indices().nth(self.overlap) {
            Some((start, _)) => &self.text[start..],
            None => "",
        }
    }
}

/// Position splitter segments in the source text
pub(crate) fn position_segments(segments: Vec<Segment>) -> Vec<Chunk> {
    let mut consumed = 0;

    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            let len = char_len(&segment.text);
            let char_offset = consumed - segment.overlap;
            consumed += len - segment.overlap;

            Chunk {
                index,
                text: segment.text,
                char_offset,
                char_len: len,
                overlap: segment.overlap,
            }
        })
        .collect()
}

/// Rebuild the source text from its chunks by dropping every overlap prefix
pub fn reconstruct(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::fresh_text).collect()
}

/// Chunking metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Number of chunks produced
    pub chunk_count: usize,
    /// Length of the longest chunk in characters
    pub max_chunk_chars: usize,
    /// Chunks longer than the configured chunk size
    pub oversized_chunks: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl Metadata {
    /// Collect statistics over produced chunks
    pub fn new(text: &str, chunks: &[Chunk], chunk_size: usize, processing_time_ms: u64) -> Self {
        Self {
            total_bytes: text.len(),
            total_chars: char_len(text),
            chunk_count: chunks.len(),
            max_chunk_chars: chunks.iter().map(|c| c.char_len).max().unwrap_or(0),
            oversized_chunks: chunks.iter().filter(|c| c.char_len > chunk_size).count(),
            processing_time_ms,
        }
    }
}

/// Complete output with chunks and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Produced chunks in source order
    pub chunks: Vec<Chunk>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Chunk texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    /// Rebuild the source text
    pub fn reconstruct(&self) -> String {
        reconstruct(&self.chunks)
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when no chunks were produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
