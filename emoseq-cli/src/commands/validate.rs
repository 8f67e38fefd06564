//! Validate-data command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use emoseq_core::data::{load_catalogue_from_dir, load_tables_from_dir};
use emoseq_core::{Catalogue, EmojiTables};

/// Arguments for the validate-data command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Directory with properties.toml, sequences.toml and catalogue.toml
    #[arg(long, value_name = "DIR", required = true)]
    pub data_dir: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate-data command
    pub fn execute(&self) -> Result<()> {
        println!("Validating emoji data: {}", self.data_dir.display());

        match self.load() {
            Ok((tables, catalogue)) => {
                let stats = tables.stats();
                println!("✓ Emoji data is valid!");
                println!("  Properties version: {}", tables.properties_version());
                println!("  Sequences version: {}", tables.sequences_version());
                println!("  Catalogue version: {}", catalogue.version());
                println!("  Emoji codepoints: {}", stats.emoji);
                println!(
                    "  Flags: {} recommended, {} valid",
                    stats.flags_recommended, stats.flags_valid
                );
                println!(
                    "  Tag sequences: {} recommended, {} valid",
                    stats.tags_recommended, stats.tags_valid
                );
                println!(
                    "  ZWJ sequences: {} recommended, {} valid",
                    stats.zwj_recommended, stats.zwj_valid
                );
                println!("  Catalogued emoji: {}", catalogue.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Emoji data is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn load(&self) -> emoseq_core::Result<(EmojiTables, Catalogue)> {
        Ok((
            load_tables_from_dir(&self.data_dir)?,
            load_catalogue_from_dir(&self.data_dir)?,
        ))
    }
}
