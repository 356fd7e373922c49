//! rechunk command-line entry point

use clap::Parser;
use rechunk_cli::commands::Commands;

/// Split text into overlapping chunks
#[derive(Debug, Parser)]
#[command(name = "rechunk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
