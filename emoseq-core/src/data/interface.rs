//! Read-only contract between the grammar matcher and the emoji data
//!
//! Every method is a pure lookup. The matcher holds a `&dyn EmojiData`
//! and never sees where the data came from.

use crate::types::{PropertySet, Validity};

/// Emoji property and sequence validity data
///
/// Implementations must be immutable after construction so one instance
/// can serve concurrent matchers without locking.
pub trait EmojiData: Send + Sync {
    /// Properties held by one codepoint
    fn properties(&self, ch: char) -> PropertySet;

    /// Validity of the region flag spelled by two regional indicators
    fn flag_validity(&self, first: char, second: char) -> Validity;

    /// Validity of a complete tag sequence, base and cancel tag included
    fn tag_sequence_validity(&self, sequence: &str) -> Validity;

    /// Validity of a complete ZWJ sequence as registered in the data
    fn zwj_sequence_validity(&self, sequence: &str) -> Validity;

    /// Element count of the longest registered ZWJ sequence
    ///
    /// Chains longer than this can only be valid through their elements,
    /// so the matcher stops looking them up.
    fn max_zwj_elements(&self) -> usize;
}
