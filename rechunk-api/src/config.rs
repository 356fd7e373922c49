//! Chunking configuration

use crate::error::{ApiError, Result};

/// Default configuration constants
pub mod defaults {
    /// Maximum chunk length in characters
    pub const CHUNK_SIZE: usize = 1000;

    /// Characters carried over from the end of one chunk into the next
    pub const CHUNK_OVERLAP: usize = 200;

    /// Separators from coarsest to finest. The empty string splits into
    /// single characters.
    pub const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

    /// Owned copy of [`SEPARATORS`]
    pub fn separators() -> Vec<String> {
        SEPARATORS.iter().map(|s| s.to_string()).collect()
    }
}

/// Configuration for recursive chunking
///
/// Lengths are counted in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ChunkConfig {
    /// Maximum length of a produced chunk
    pub chunk_size: usize,
    /// Number of trailing characters of a closed chunk that seed the next one
    pub chunk_overlap: usize,
    /// Ordered separator list, tried from first to last
    pub separators: Vec<String>,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            chunk_overlap: defaults::CHUNK_OVERLAP,
            separators: defaults::separators(),
        }
    }
}

impl ChunkConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Raw character slicing only
    pub fn characters(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .separators([""])
            .build()
    }

    /// Line breaks first, then raw character slicing
    pub fn lines(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .separators(["\n", ""])
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ApiError::Config(
                "chunk_size must be greater than 0".into(),
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ApiError::Config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }

    /// Parse and validate a configuration from TOML
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Fluent builder for [`ChunkConfig`]
///
/// Unset fields fall back to their defaults independently.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
    separators: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk length in characters
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Set the overlap length in characters
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = Some(overlap);
        self
    }

    /// Replace the separator list
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = Some(separators.into_iter().map(Into::into).collect());
        self
    }

    /// Append one separator, starting from an empty list
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separators
            .get_or_insert_with(Vec::new)
            .push(separator.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChunkConfig> {
        let mut config = ChunkConfig::default();

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }

        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = overlap;
        }

        if let Some(separators) = self.separators {
            config.separators = separators;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.separators, vec!["\n\n", "\n", " ", ""]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults_fields_independently() {
        let config = ChunkConfig::builder().chunk_size(500).build().unwrap();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.chunk_overlap, defaults::CHUNK_OVERLAP);
        assert_eq!(config.separators, defaults::separators());
    }

    #[test]
    fn test_builder_separator_appends() {
        let config = ChunkConfig::builder()
            .separator(". ")
            .separator("")
            .build()
            .unwrap();
        assert_eq!(config.separators, vec![". ", ""]);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = ChunkConfig::builder()
            .chunk_size(0)
            .chunk_overlap(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("chunk_size must be greater than 0"));
    }

    #[test]
    fn test_overlap_not_less_than_size_rejected() {
        assert!(ChunkConfig::builder()
            .chunk_size(100)
            .chunk_overlap(100)
            .build()
            .is_err());
        assert!(ChunkConfig::builder()
            .chunk_size(100)
            .chunk_overlap(150)
            .build()
            .is_err());
        assert!(ChunkConfig::builder()
            .chunk_size(100)
            .chunk_overlap(99)
            .build()
            .is_ok());
    }

    #[test]
    fn test_default_overlap_with_small_size_rejected() {
        // overlap defaults to 200, which is too large for a size of 100
        assert!(ChunkConfig::builder().chunk_size(100).build().is_err());
    }

    #[test]
    fn test_presets() {
        let chars = ChunkConfig::characters(10, 2).unwrap();
        assert_eq!(chars.separators, vec![""]);

        let lines = ChunkConfig::lines(10, 2).unwrap();
        assert_eq!(lines.separators, vec!["\n", ""]);

        assert!(ChunkConfig::characters(10, 10).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_partial() {
        let config = ChunkConfig::from_toml_str("chunk_size = 300\nchunk_overlap = 30\n").unwrap();
        assert_eq!(config.chunk_size, 300);
        assert_eq!(config.chunk_overlap, 30);
        assert_eq!(config.separators, defaults::separators());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_separators() {
        let config = ChunkConfig::from_toml_str(
            r#"
chunk_size = 50
chunk_overlap = 5
separators = ["\n", ""]
"#,
        )
        .unwrap();
        assert_eq!(config.separators, vec!["\n", ""]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_invalid_values() {
        let err = ChunkConfig::from_toml_str("chunk_size = 10\nchunk_overlap = 10\n").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_unknown_field() {
        let err = ChunkConfig::from_toml_str("chunk_sise = 10\n").unwrap_err();
        assert!(matches!(err, ApiError::Toml(_)));
    }
}
