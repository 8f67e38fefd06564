//! emoseq command-line entry point

use clap::Parser;
use emoseq_cli::commands::Commands;

/// Find and classify emoji sequences in text
#[derive(Debug, Parser)]
#[command(name = "emoseq", version, about, propagate_version = true)]
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
