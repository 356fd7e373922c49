//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::separator::escape_separator;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::load(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        });

        match result {
            Ok(config) => {
                let separators: Vec<String> = config
                    .chunking
                    .separators
                    .iter()
                    .map(|s| escape_separator(s))
                    .collect();

                println!("✓ Configuration is valid!");
                println!("  Chunk size:    {}", config.chunking.chunk_size);
                println!("  Chunk overlap: {}", config.chunking.chunk_overlap);
                println!("  Separators:    [{}]", separators.join(", "));
                println!("  Format:        {}", config.output.default_format);
                println!(
                    "  Threads:       {}",
                    config.performance.resolved_threads()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
