//! Reading chunking sources from files and stdin

use anyhow::{Context, Result};
use rechunk_api::Input;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A named piece of text to chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Display name: the file path, or `<stdin>`
    pub name: String,
    /// Full UTF-8 content
    pub text: String,
}

/// File reader with UTF-8 validation
///
/// Chunk lengths are counted in characters, so input must be valid UTF-8.
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into a named source
    pub fn read_source(path: &Path) -> Result<Source> {
        let size = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?
            .len();
        log::debug!("Reading {} ({} bytes)", path.display(), size);

        Ok(Source {
            name: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }

    /// Read any reader to the end as a named source
    pub fn read_from<R: Read + 'static>(name: &str, reader: R) -> Result<Source> {
        let text = Input::from_reader(reader)
            .read_text()
            .with_context(|| format!("Failed to read {name}"))?;

        Ok(Source {
            name: name.to_string(),
            text,
        })
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<Source> {
        Self::read_from("<stdin>", io::stdin())
    }
}
