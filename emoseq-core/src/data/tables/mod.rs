//! Runtime tables for emoji data
//!
//! All tables are immutable once built and allocation-free during lookup.

pub mod flag;
pub mod property;
pub mod sequence;

pub use flag::FlagTable;
pub use property::PropertyTable;
pub use sequence::SequenceTable;
