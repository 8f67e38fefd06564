//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Emoji data could not be loaded
    DataError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::DataError(msg) => write!(f, "Emoji data error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<emoseq_core::DataError> for CliError {
    fn from(err: emoseq_core::DataError) -> Self {
        CliError::DataError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("test.txt".to_string()).to_string(),
            "File not found: test.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad level".to_string()).to_string(),
            "Configuration error: bad level"
        );
    }

    #[test]
    fn test_from_data_error() {
        let err: CliError = emoseq_core::DataError::InvalidRegion("P1".to_string()).into();
        assert_eq!(err.to_string(), "Emoji data error: invalid region code 'P1'");
    }

    #[test]
    fn test_error_with_unicode_path() {
        let error = CliError::FileNotFound("ファイル/絵文字.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/絵文字.txt");

        let any: anyhow::Error = error.into();
        assert!(any.downcast_ref::<CliError>().is_some());
    }
}
