//! Configuration module
//!
//! Values from `--config FILE` sit between command-line flags and the
//! built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emoseq_core::Level;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scan defaults
    #[serde(default)]
    pub scan: ScanConfig,

    /// Data source
    #[serde(default)]
    pub data: DataConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Scan-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Default grammar level
    pub default_level: String,

    /// Default output format
    pub default_format: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_level: Level::default().to_string(),
            default_format: "text".to_string(),
        }
    }
}

/// Emoji data configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DataConfig {
    /// Directory holding properties.toml, sequences.toml and catalogue.toml
    pub dir: Option<PathBuf>,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    #[serde(default)]
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Surface bad defaults at load time, not at first use
        config.scan.level()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise use defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl ScanConfig {
    /// Parsed default level
    pub fn level(&self) -> Result<Level, CliError> {
        self.default_level
            .parse()
            .map_err(CliError::ConfigError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.scan.level().unwrap(), Level::Recommended);
        assert_eq!(config.scan.default_format, "text");
        assert!(config.data.dir.is_none());
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[scan]\ndefault_level = \"well-formed\"\ndefault_format = \"json\"\n\n[performance]\nworker_threads = 2\n"
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.scan.level().unwrap(), Level::WellFormed);
        assert_eq!(config.scan.default_format, "json");
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_load_rejects_unknown_level() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[scan]\ndefault_level = \"strict\"\ndefault_format = \"text\"\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown level"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/emoseq.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
