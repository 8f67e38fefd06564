//! Emoji data loader
//!
//! Parses the bundled data once per process and hands out shared
//! references. Custom data can be loaded from a directory holding the
//! same three files.

use std::fs;
use std::path::Path;
#[cfg(feature = "embedded")]
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::data::config::{CatalogueConfig, PropertiesConfig, SequencesConfig};
use crate::data::runtime::EmojiTables;
use crate::error::{DataError, Result};

/// File names expected in a data directory
pub const PROPERTIES_FILE: &str = "properties.toml";
pub const SEQUENCES_FILE: &str = "sequences.toml";
pub const CATALOGUE_FILE: &str = "catalogue.toml";

#[cfg(feature = "embedded")]
static EMBEDDED_TABLES: OnceLock<std::result::Result<EmojiTables, String>> = OnceLock::new();
#[cfg(feature = "embedded")]
static EMBEDDED_CATALOGUE: OnceLock<std::result::Result<Catalogue, String>> = OnceLock::new();

/// Bundled emoji tables, parsed on first access
#[cfg(feature = "embedded")]
pub fn embedded_tables() -> Result<&'static EmojiTables> {
    EMBEDDED_TABLES
        .get_or_init(|| {
            tables_from_str(
                include_str!("../../configs/emoji/properties.toml"),
                include_str!("../../configs/emoji/sequences.toml"),
            )
            .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| DataError::Embedded(e.clone()))
}

/// Bundled emoji catalogue, parsed on first access
#[cfg(feature = "embedded")]
pub fn embedded_catalogue() -> Result<&'static Catalogue> {
    EMBEDDED_CATALOGUE
        .get_or_init(|| {
            catalogue_from_str(include_str!("../../configs/emoji/catalogue.toml"))
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| DataError::Embedded(e.clone()))
}

/// Build tables from the contents of `properties.toml` and `sequences.toml`
pub fn tables_from_str(properties: &str, sequences: &str) -> Result<EmojiTables> {
    let properties: PropertiesConfig = parse("properties", properties)?;
    let sequences: SequencesConfig = parse("sequences", sequences)?;
    EmojiTables::from_config(&properties, &sequences)
}

/// Build a catalogue from the contents of `catalogue.toml`
pub fn catalogue_from_str(catalogue: &str) -> Result<Catalogue> {
    let config: CatalogueConfig = parse("catalogue", catalogue)?;
    Catalogue::from_config(&config)
}

/// Load `properties.toml` and `sequences.toml` from `dir`
pub fn load_tables_from_dir(dir: impl AsRef<Path>) -> Result<EmojiTables> {
    let dir = dir.as_ref();
    debug!(dir = %dir.display(), "loading emoji tables");
    let properties = read(&dir.join(PROPERTIES_FILE))?;
    let sequences = read(&dir.join(SEQUENCES_FILE))?;
    tables_from_str(&properties, &sequences)
}

/// Load `catalogue.toml` from `dir`
pub fn load_catalogue_from_dir(dir: impl AsRef<Path>) -> Result<Catalogue> {
    let dir = dir.as_ref();
    debug!(dir = %dir.display(), "loading emoji catalogue");
    catalogue_from_str(&read(&dir.join(CATALOGUE_FILE))?)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(table: &'static str, contents: &str) -> Result<T> {
    toml::from_str(contents).map_err(|source| DataError::Parse { table, source })
}
