//! Classify command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use emoseq_core::{classify_char, EmojiData, Property};

use super::Verbosity;
use crate::config::CliConfig;
use crate::data_source::DataSource;
use crate::output::codepoint_label;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Text whose codepoints are classified
    #[arg(required = true, value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Directory with custom emoji data files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        let config = CliConfig::load_optional(self.config.as_deref())?;
        let tables = DataSource::resolve(self.data_dir.as_deref(), &config).load_tables()?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for text in &self.texts {
            write_classification(&mut out, &*tables, text)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// One line per codepoint: label, the character, its properties or `-`
pub fn write_classification<W: Write>(
    out: &mut W,
    data: &dyn EmojiData,
    text: &str,
) -> Result<()> {
    for ch in text.chars() {
        let properties = classify_char(data, ch)
            .map(|props| {
                props
                    .iter()
                    .map(Property::name)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "{} {} {}", codepoint_label(ch), ch, properties)?;
    }
    Ok(())
}
