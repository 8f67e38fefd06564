//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Document;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file into a document named by its path
    pub fn read_document(path: &Path) -> Result<Document> {
        Ok(Document {
            source: path.display().to_string(),
            content: Self::read_text(path)?,
        })
    }
}
