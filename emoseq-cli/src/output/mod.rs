//! Output formatting module

use anyhow::Result;
use emoseq_core::{EmojiMatch, SequenceKind, Validity};
use serde::Serialize;

/// One scanned match, ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// File path or inline text label
    pub source: String,
    /// Byte offset in the source
    pub offset: usize,
    /// The matched sequence
    pub text: String,
    pub kind: SequenceKind,
    pub validity: Validity,
    /// `U+XXXX` notation, one entry per codepoint
    pub codepoints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<String>,
}

impl MatchRecord {
    pub fn new(source: &str, m: &EmojiMatch<'_>) -> Self {
        Self {
            source: source.to_string(),
            offset: m.start(),
            text: m.as_str().to_string(),
            kind: m.kind(),
            validity: m.validity(),
            codepoints: m.codepoints().map(codepoint_label).collect(),
            group: None,
            subgroup: None,
        }
    }

    /// Attach catalogue placement
    pub fn with_category(mut self, group: &str, subgroup: &str) -> Self {
        self.group = Some(group.to_string());
        self.subgroup = Some(subgroup.to_string());
        self
    }
}

/// `U+1F600` style label
pub fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match
    fn format_match(&mut self, record: &MatchRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) fn sample_record() -> MatchRecord {
    MatchRecord {
        source: "text[1]".to_string(),
        offset: 3,
        text: "🛌🏽".to_string(),
        kind: SequenceKind::ModifierSequence,
        validity: Validity::Recommended,
        codepoints: vec!["U+1F6CC".to_string(), "U+1F3FD".to_string()],
        group: Some("People & Body".to_string()),
        subgroup: Some("person-resting".to_string()),
    }
}
