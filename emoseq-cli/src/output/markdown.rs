//! Markdown output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs matches as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            match_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        if self.match_count == 0 {
            writeln!(
                self.writer,
                "| # | Source | Offset | Emoji | Kind | Validity | Codepoints |"
            )?;
            writeln!(self.writer, "|---|---|---|---|---|---|---|")?;
        }
        self.match_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} |",
            self.match_count,
            record.source.replace('|', "\\|"),
            record.offset,
            record.text,
            record.kind,
            record.validity,
            record.codepoints.join(" ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total matches: {}*", self.match_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
