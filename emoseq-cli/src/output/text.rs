//! Plain text output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one tab-separated line per match
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        write!(
            self.writer,
            "{}:{}\t{}\t{}\t{}\t{}",
            record.source,
            record.offset,
            record.text,
            record.kind,
            record.validity,
            record.codepoints.join(" ")
        )?;
        if let (Some(group), Some(subgroup)) = (&record.group, &record.subgroup) {
            write!(self.writer, "\t{group} / {subgroup}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
