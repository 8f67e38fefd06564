//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// One named piece of text to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path or `text[N]` for inline text
    pub source: String,
    pub content: String,
}

impl Document {
    /// Inline texts from `--text`, named by position
    pub fn from_texts(texts: &[String]) -> Vec<Self> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document {
                source: format!("text[{}]", i + 1),
                content: text.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts() {
        let docs = Document::from_texts(&["😴".to_string(), "🇵🇹".to_string()]);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source, "text[1]");
        assert_eq!(docs[1].content, "🇵🇹");
    }
}
