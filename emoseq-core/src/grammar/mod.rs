//! Emoji sequence grammar
//!
//! [`Matcher`] implements every level with one algorithm; the level only
//! chooses which productions are attempted and the minimum validity a
//! flag, tag or ZWJ sequence must reach.

pub mod cursor;
pub mod matcher;
#[cfg(test)]
pub(crate) mod testing;

pub use matcher::{Candidate, Matcher};
