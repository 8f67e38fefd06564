//! Emoji data: schema, runtime tables and loading
//!
//! The grammar matcher consumes data only through [`EmojiData`], so the
//! bundled tables can be swapped for a newer edition or a synthetic
//! provider in tests.

pub mod config;
pub mod interface;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use interface::EmojiData;
#[cfg(feature = "embedded")]
pub use loader::{embedded_catalogue, embedded_tables};
pub use loader::{
    catalogue_from_str, load_catalogue_from_dir, load_tables_from_dir, tables_from_str,
};
pub use runtime::{EmojiTables, TableStats};
