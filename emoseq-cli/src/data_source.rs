//! Emoji data source management for CLI

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emoseq_core::{data, Catalogue, EmojiTables};

use crate::config::CliConfig;
use crate::error::CliError;

/// Where the emoji tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Data bundled into the binary
    BuiltIn,
    /// Directory with `properties.toml`, `sequences.toml` and `catalogue.toml`
    Directory(PathBuf),
}

/// Tables and catalogue loaded from one source
#[derive(Debug)]
pub struct LoadedData {
    pub tables: Cow<'static, EmojiTables>,
    pub catalogue: Cow<'static, Catalogue>,
}

impl DataSource {
    /// Command-line flag first, then the config file, then built-in data
    pub fn resolve(flag: Option<&Path>, config: &CliConfig) -> Self {
        match flag.or(config.data.dir.as_deref()) {
            Some(dir) => DataSource::Directory(dir.to_path_buf()),
            None => DataSource::BuiltIn,
        }
    }

    /// Get the display name for the data source
    pub fn display_name(&self) -> String {
        match self {
            DataSource::BuiltIn => "Built-in".to_string(),
            DataSource::Directory(dir) => format!("Directory: {}", dir.display()),
        }
    }

    /// Load the emoji tables only
    pub fn load_tables(&self) -> Result<Cow<'static, EmojiTables>> {
        log::debug!("Loading emoji tables from {}", self.display_name());
        match self {
            DataSource::BuiltIn => Ok(Cow::Borrowed(
                data::embedded_tables().map_err(CliError::from)?,
            )),
            DataSource::Directory(dir) => Ok(Cow::Owned(
                data::load_tables_from_dir(dir)
                    .map_err(CliError::from)
                    .with_context(|| format!("Failed to load emoji data from {}", dir.display()))?,
            )),
        }
    }

    /// Load the catalogue only
    pub fn load_catalogue(&self) -> Result<Cow<'static, Catalogue>> {
        match self {
            DataSource::BuiltIn => Ok(Cow::Borrowed(
                data::embedded_catalogue().map_err(CliError::from)?,
            )),
            DataSource::Directory(dir) => Ok(Cow::Owned(
                data::load_catalogue_from_dir(dir)
                    .map_err(CliError::from)
                    .with_context(|| format!("Failed to load catalogue from {}", dir.display()))?,
            )),
        }
    }

    /// Load tables and catalogue
    pub fn load(&self) -> Result<LoadedData> {
        Ok(LoadedData {
            tables: self.load_tables()?,
            catalogue: self.load_catalogue()?,
        })
    }
}
