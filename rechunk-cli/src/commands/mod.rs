//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use rechunk_api::config::defaults;

use crate::separator::escape_separator;

pub mod chunk;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into overlapping chunks
    Chunk(chunk::ChunkArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the default separators in the order they are tried
    Separators,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => vec![
                "text      header line per chunk, then the chunk verbatim".to_string(),
                "json      array of chunks with offsets and overlap".to_string(),
                "markdown  one section per chunk".to_string(),
            ],
            ListCommands::Separators => defaults::SEPARATORS
                .iter()
                .enumerate()
                .map(|(i, sep)| format!("{}. {}", i + 1, escape_separator(sep)))
                .collect(),
        }
    }
}
