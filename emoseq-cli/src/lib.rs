//! emoseq CLI library
//!
//! This library provides the command-line interface for scanning text
//! for emoji sequences, classifying codepoints and browsing the catalogue.

pub mod commands;
pub mod config;
pub mod data_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
