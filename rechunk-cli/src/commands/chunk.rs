//! Chunk command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use rechunk_api::{ChunkConfig, Output, TextChunker};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Source};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use crate::separator::parse_separator;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "stdin"
    )]
    pub input: Vec<String>,

    /// Read text from standard input
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum chunk length in characters
    #[arg(long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long, value_name = "CHARS")]
    pub chunk_overlap: Option<usize>,

    /// Separator, coarsest first; repeat to build the list. Accepts \n, \t,
    /// \r and \\ escapes; an empty value splits into characters
    #[arg(
        short,
        long = "separator",
        value_name = "SEP",
        value_parser = parse_separator,
        allow_hyphen_values = true
    )]
    pub separators: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: from config, else one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting chunking");
        log::debug!("Arguments: {:?}", self);

        let cli_config = self.load_config()?;
        let chunk_config = self.resolve_chunk_config(&cli_config)?;
        let format = match self.format {
            Some(format) => format,
            None => cli_config.default_format()?,
        };
        let threads = self
            .threads
            .unwrap_or_else(|| cli_config.performance.resolved_threads());

        log::info!(
            "chunk_size={} chunk_overlap={} separators={:?} threads={}",
            chunk_config.chunk_size,
            chunk_config.chunk_overlap,
            chunk_config.separators,
            threads
        );

        let chunker = TextChunker::with_config(chunk_config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let sources = self.read_sources()?;
        let outputs = chunk_sources(&chunker, &sources, threads, self.quiet)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, &cli_config.output);

        for (source, output) in sources.iter().zip(&outputs) {
            for chunk in &output.chunks {
                formatter.format_chunk(&source.name, chunk)?;
            }
            formatter.source_metadata(&source.name, &output.metadata)?;
        }
        formatter.finish()?;

        let total: usize = outputs.iter().map(Output::len).sum();
        log::info!("Wrote {} chunk(s) from {} source(s)", total, sources.len());

        Ok(())
    }

    /// Merge config file values with command-line overrides and validate
    pub fn resolve_chunk_config(&self, cli_config: &CliConfig) -> Result<ChunkConfig> {
        let mut config = cli_config.chunking.clone();

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = overlap;
        }
        if !self.separators.is_empty() {
            config.separators = self.separators.clone();
        }

        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    fn read_sources(&self) -> Result<Vec<Source>> {
        if self.stdin {
            return Ok(vec![FileReader::read_stdin()?]);
        }

        resolve_patterns(&self.input)?
            .iter()
            .map(|path| FileReader::read_source(path))
            .collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Chunk every source on a pool of `threads` workers, preserving order
pub fn chunk_sources(
    chunker: &TextChunker,
    sources: &[Source],
    threads: usize,
    quiet: bool,
) -> Result<Vec<Output>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .context("Failed to build worker pool")?;

    let mut progress = ProgressReporter::new(quiet);
    progress.init_sources(sources.len() as u64);

    let outputs = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let output = chunker
                    .process_text(&source.text)
                    .map_err(|e| CliError::ProcessingError(format!("{}: {}", source.name, e)));
                progress.source_completed(&source.name);
                output
            })
            .collect::<Result<Vec<_>, _>>()
    });

    progress.finish();
    Ok(outputs?)
}
