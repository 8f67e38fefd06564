//! Emoji sequence recognition for Unicode text
//!
//! This crate finds emoji sequences (singletons, presentation sequences,
//! modifier, keycap, flag, tag and ZWJ sequences) at six conformance
//! levels, from any emoji-related codepoint up to recommended sequences
//! only. A longer production that fails the level's validity check falls
//! back to the longest shorter production that passes, leaving the
//! rejected suffix for the next match.
//!
//! # Architecture
//!
//! - **Data**: property and sequence tables loaded from TOML, consumed only
//!   through the [`EmojiData`] trait
//! - **Grammar**: one [`Matcher`](grammar::Matcher) parameterized by [`Level`]
//! - **Pattern**: [`EmojiPattern`], a regex-like facade for search and scan
//! - **Catalogue**: grouped emoji listing with diagnostics for retired names
//!
//! # Example
//!
//! ```rust
//! use emoseq_core::{EmojiPattern, Level, SequenceKind};
//!
//! let pattern = EmojiPattern::recommended().unwrap();
//! let m = pattern.find("I 🛌🏽 at night").unwrap();
//! assert_eq!(m.as_str(), "🛌🏽");
//! assert_eq!(m.kind(), SequenceKind::ModifierSequence);
//!
//! let basic = EmojiPattern::embedded(Level::Basic).unwrap();
//! assert_eq!(basic.scan("🛌🏽 🇵🇹"), vec!["🛌"]);
//! ```

pub mod catalogue;
pub mod classifier;
pub mod data;
pub mod diagnostic;
pub mod error;
pub mod grammar;
pub mod pattern;
pub mod types;

pub use catalogue::{Catalogue, Group, Subgroup};
pub use classifier::{classify, classify_char};
pub use data::{EmojiData, EmojiTables};
pub use diagnostic::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, StderrSink, TracingSink,
};
pub use error::{DataError, Result};
pub use pattern::{EmojiMatch, EmojiPattern, Matches};
pub use types::{Level, Property, PropertySet, SequenceKind, Validity};

/// Emoji properties of the first codepoint of `input`, using the bundled data
#[cfg(feature = "embedded")]
pub fn properties(input: &str) -> Result<Option<Vec<Property>>> {
    Ok(classify(data::embedded_tables()?, input))
}

/// First recommended emoji sequence in `text`, using the bundled data
#[cfg(feature = "embedded")]
pub fn find(text: &str) -> Result<Option<EmojiMatch<'_>>> {
    Ok(EmojiPattern::recommended()?.find(text))
}

/// Every non-overlapping sequence in `text` at `level`, using the bundled data
#[cfg(feature = "embedded")]
pub fn scan(text: &str, level: Level) -> Result<Vec<&str>> {
    Ok(EmojiPattern::embedded(level)?.scan(text))
}

/// The bundled catalogue
#[cfg(feature = "embedded")]
pub fn catalogue() -> Result<&'static Catalogue> {
    data::embedded_catalogue()
}
