//! Data loading errors
//!
//! Matching and classification are total over decoded text, so the only
//! fallible operations in this crate are building the lookup tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating emoji data tables
#[derive(Error, Debug)]
pub enum DataError {
    /// TOML syntax or schema error
    #[error("failed to parse {table} data: {source}")]
    Parse {
        /// Which table was being parsed (`properties`, `sequences`, `catalogue`)
        table: &'static str,
        /// Underlying deserialization error
        #[source]
        source: toml::de::Error,
    },

    /// Malformed codepoint or codepoint range
    #[error("invalid codepoint range '{0}'")]
    InvalidRange(String),

    /// Region code that is not two ASCII uppercase letters
    #[error("invalid region code '{0}'")]
    InvalidRegion(String),

    /// Subdivision code with an unexpected shape
    #[error("invalid subdivision code '{0}'")]
    InvalidSubdivision(String),

    /// Codepoint sequence that does not parse or is not a ZWJ sequence
    #[error("invalid codepoint sequence '{0}'")]
    InvalidSequence(String),

    /// Structural problem in the catalogue
    #[error("invalid catalogue: {0}")]
    InvalidCatalogue(String),

    /// I/O error while reading a data file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The data bundled into the binary failed to load
    #[error("embedded emoji data is unusable: {0}")]
    Embedded(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::InvalidRegion("P1".to_string());
        assert_eq!(err.to_string(), "invalid region code 'P1'");

        let err = DataError::Io {
            path: PathBuf::from("/nowhere/sequences.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("failed to read /nowhere/sequences.toml"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        use std::error::Error as _;

        let source = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err = DataError::Parse {
            table: "sequences",
            source,
        };
        assert!(err.to_string().starts_with("failed to parse sequences data"));
        assert!(err.source().is_some());
    }
}
