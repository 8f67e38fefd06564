//! List command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use emoseq_core::{Catalogue, DiagnosticSink, StderrSink};

use super::Verbosity;
use crate::config::CliConfig;
use crate::data_source::DataSource;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Group to list subgroups of
    #[arg(value_name = "GROUP")]
    pub group: Option<String>,

    /// Subgroup to list emoji of
    #[arg(value_name = "SUBGROUP", requires = "group")]
    pub subgroup: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,

    /// Directory with custom emoji data files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Supported listing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// One entry per line
    Text,
    /// JSON array of names
    Json,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        let config = CliConfig::load_optional(self.config.as_deref())?;
        let catalogue = DataSource::resolve(self.data_dir.as_deref(), &config).load_catalogue()?;

        // Unknown categories are diagnosed on stderr and list nothing
        let Some(entries) = self.entries(&catalogue, &StderrSink) else {
            return Ok(());
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_entries(&mut out, &entries, self.format)?;
        out.flush()?;
        Ok(())
    }

    /// Names at the requested depth, or `None` when a category is missing
    pub fn entries<'c>(
        &self,
        catalogue: &'c Catalogue,
        sink: &dyn DiagnosticSink,
    ) -> Option<Vec<&'c str>> {
        match (&self.group, &self.subgroup) {
            (None, _) => Some(catalogue.list().iter().map(|g| g.name()).collect()),
            (Some(group), None) => {
                let group = catalogue.list_group_with(group, sink)?;
                Some(group.subgroups().iter().map(|s| s.name()).collect())
            }
            (Some(group), Some(subgroup)) => {
                let emoji = catalogue.list_subgroup_with(group, subgroup, sink)?;
                Some(emoji.iter().map(String::as_str).collect())
            }
        }
    }
}

fn write_entries<W: Write>(out: &mut W, entries: &[&str], format: ListFormat) -> Result<()> {
    match format {
        ListFormat::Text => {
            for entry in entries {
                writeln!(out, "{entry}")?;
            }
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
