//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use rechunk_api::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune chunk size and separators");
        println!("2. Validate your configuration:");
        println!("   rechunk validate --config {}", self.output.display());
        println!("3. Use it for chunking:");
        println!(
            "   rechunk chunk -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# rechunk configuration

[chunking]
# Maximum chunk length in characters (must be greater than 0)
chunk_size = {size}

# Trailing characters of a closed chunk that start the next one
# (must be less than chunk_size)
chunk_overlap = {overlap}

# Separators, coarsest first. A piece that cannot fit is re-split with
# the next separator; "" splits into single characters.
separators = ["\n\n", "\n", " ", ""]

[output]
# One of: text, json, markdown
default_format = "text"

# Add per-source statistics to the output
include_metadata = false

# Pretty print JSON output
pretty_json = true

[performance]
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#,
            size = defaults::CHUNK_SIZE,
            overlap = defaults::CHUNK_OVERLAP,
        )
    }
}
