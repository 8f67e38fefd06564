//! JSON output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs matches as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<MatchRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_record;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_match(&sample_record()).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        let first = &value[0];
        assert_eq!(first["text"], "🛌🏽");
        assert_eq!(first["kind"], "modifier-sequence");
        assert_eq!(first["validity"], "recommended");
        assert_eq!(first["codepoints"][1], "U+1F3FD");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
