//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};

pub mod classify;
pub mod list;
pub mod scan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find emoji sequences in text or files
    Scan(scan::ScanArgs),

    /// Show the emoji properties of every codepoint
    Classify(classify::ClassifyArgs),

    /// Browse the emoji catalogue by group and subgroup
    List(list::ListArgs),

    /// Check a directory of emoji data files
    ValidateData(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
            Commands::List(args) => args.execute(),
            Commands::ValidateData(args) => args.execute(),
        }
    }
}

/// Logging flags shared by every command
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Classify(classify::ClassifyArgs {
            texts: vec!["😴".to_string()],
            data_dir: None,
            config: None,
            verbosity: Verbosity::default(),
        });

        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Classify"));
        assert!(debug_str.contains("😴"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let verbosity = Verbosity {
            quiet: false,
            verbose: 2,
        };
        verbosity.init_logging();
        verbosity.init_logging();
    }
}
