//! Scan command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use emoseq_core::{Catalogue, EmojiMatch, EmojiPattern, Level};
use rayon::prelude::*;

use super::Verbosity;
use crate::config::CliConfig;
use crate::data_source::DataSource;
use crate::error::CliError;
use crate::input::{resolve_patterns, Document, FileReader};
use crate::output::{
    JsonFormatter, MarkdownFormatter, MatchRecord, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Inline text to scan instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Grammar level [default: recommended, or the config file's]
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<Level>,

    /// Output format [default: text, or the config file's]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads for file input
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Directory with custom emoji data files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per match
    Text,
    /// JSON array of matches with metadata
    Json,
    /// Markdown table
    Markdown,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        log::info!("Starting emoji scan");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load_optional(self.config.as_deref())?;
        let level = match self.level {
            Some(level) => level,
            None => config.scan.level()?,
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.scan.default_format, true)
                .map_err(CliError::ConfigError)?,
        };

        let loaded = DataSource::resolve(self.data_dir.as_deref(), &config).load()?;
        let pattern = EmojiPattern::new(&*loaded.tables, level);
        log::info!("Scanning at level {level}");

        let records = if self.text.is_empty() {
            let threads = self
                .threads
                .filter(|&n| n > 0)
                .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
                .unwrap_or_else(num_cpus::get);
            self.scan_files(&pattern, &loaded.catalogue, threads)?
        } else {
            Document::from_texts(&self.text)
                .iter()
                .flat_map(|doc| scan_document(&pattern, &loaded.catalogue, doc))
                .collect()
        };
        log::info!("Found {} matches", records.len());

        let mut formatter = create_formatter(format, self.open_output()?);
        for record in &records {
            formatter.format_match(record)?;
        }
        formatter.finish()?;
        Ok(())
    }

    /// Scan every resolved file on a dedicated pool, keeping input order
    fn scan_files(
        &self,
        pattern: &EmojiPattern<'_>,
        catalogue: &Catalogue,
        threads: usize,
    ) -> Result<Vec<MatchRecord>> {
        let paths = resolve_patterns(&self.input)?;
        log::info!("Scanning {} files with {} threads", paths.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;

        let mut progress = ProgressReporter::new(self.verbosity.quiet);
        progress.init_files(paths.len() as u64);

        let results: Vec<Result<Vec<MatchRecord>>> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let doc = FileReader::read_document(path)?;
                    let records = scan_document(pattern, catalogue, &doc);
                    progress.file_completed(&doc.source);
                    Ok(records)
                })
                .collect()
        });
        progress.finish();

        let mut records = Vec::new();
        for result in results {
            records.extend(result?);
        }
        Ok(records)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

/// Every match in one document, with catalogue placement where known
pub fn scan_document(
    pattern: &EmojiPattern<'_>,
    catalogue: &Catalogue,
    doc: &Document,
) -> Vec<MatchRecord> {
    pattern
        .find_iter(&doc.content)
        .map(|m| {
            let record = MatchRecord::new(&doc.source, &m);
            match locate(catalogue, &m) {
                Some((group, subgroup)) => record.with_category(group, subgroup),
                None => record,
            }
        })
        .collect()
}

/// Catalogue entries are fully qualified, so a bare codepoint is also
/// looked up with the emoji presentation selector appended
fn locate<'c>(catalogue: &'c Catalogue, m: &EmojiMatch<'_>) -> Option<(&'c str, &'c str)> {
    let found = catalogue.locate(m.as_str()).or_else(|| {
        let mut chars = m.as_str().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => catalogue.locate(&format!("{ch}\u{FE0F}")),
            _ => None,
        }
    });
    found.map(|(group, subgroup)| (group.name(), subgroup.name()))
}

fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoseq_core::data::{embedded_catalogue, embedded_tables};
    use emoseq_core::SequenceKind;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> ScanArgs {
        ScanArgs {
            input: Vec::new(),
            text: Vec::new(),
            level: None,
            format: None,
            output: None,
            threads: Some(2),
            data_dir: None,
            config: None,
            verbosity: Verbosity {
                quiet: true,
                verbose: 0,
            },
        }
    }

    fn document(content: &str) -> Document {
        Document {
            source: "text[1]".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_scan_document_attaches_category() {
        let tables = embedded_tables().unwrap();
        let catalogue = embedded_catalogue().unwrap();
        let pattern = EmojiPattern::new(tables, Level::Recommended);

        let records = scan_document(&pattern, catalogue, &document("cool 😎 and ☺\u{FE0F}"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].offset, 5);
        assert_eq!(records[0].subgroup.as_deref(), Some("face-glasses"));
        assert_eq!(records[1].kind, SequenceKind::PresentationSequence);
        assert_eq!(records[1].group.as_deref(), Some("Smileys & Emotion"));
    }

    #[test]
    fn test_bare_text_emoji_found_in_catalogue() {
        let tables = embedded_tables().unwrap();
        let catalogue = embedded_catalogue().unwrap();
        let pattern = EmojiPattern::new(tables, Level::Text);

        let records = scan_document(&pattern, catalogue, &document("☺"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, SequenceKind::Singleton);
        assert_eq!(records[0].subgroup.as_deref(), Some("face-affection"));
    }

    #[test]
    fn test_execute_text_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args();
        args.text = vec!["🛌🏽 🇵🇹".to_string()];
        args.level = Some(Level::Basic);
        args.format = Some(OutputFormat::Json);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        let texts: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, ["🛌"]);
    }

    #[test]
    fn test_execute_files_keeps_input_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "second 🤠").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "first 😴").unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut args = args();
        args.input = vec![format!("{}/*.txt", temp_dir.path().display())];
        args.output = Some(output.clone());
        args.execute().unwrap();

        let out = fs::read_to_string(output).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("a.txt:6\t😴"));
        assert!(lines[1].contains("b.txt:7\t🤠"));
    }

    #[test]
    fn test_execute_missing_input() {
        let mut args = args();
        args.input = vec!["/nonexistent/*.txt".to_string()];
        assert!(args.execute().is_err());
    }
}
