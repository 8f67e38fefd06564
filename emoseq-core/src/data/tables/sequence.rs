//! Exact-match sequence validity for tag and ZWJ sequences
//!
//! Keys are the sequences themselves, so a lookup on a slice of the
//! scanned text needs no allocation.

use std::collections::HashMap;

use crate::grammar::cursor::{CANCEL_TAG, ZWJ};
use crate::types::Validity;

/// Black flag, the base of every registered tag sequence
const BLACK_FLAG: char = '\u{1F3F4}';
const TAG_OFFSET: u32 = 0xE0000;

/// Registered multi-codepoint sequences
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    entries: HashMap<String, Validity>,
    max_joined: usize,
}

impl SequenceTable {
    /// Build from already-expanded sequences
    pub fn new(
        recommended: impl IntoIterator<Item = String>,
        valid: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut entries = HashMap::new();
        for seq in valid {
            entries.insert(seq, Validity::Valid);
        }
        for seq in recommended {
            entries.insert(seq, Validity::Recommended);
        }
        let max_joined = entries
            .keys()
            .map(|seq| seq.matches(ZWJ).count() + 1)
            .max()
            .unwrap_or(0);
        Self {
            entries,
            max_joined,
        }
    }

    /// Validity of an exact sequence; unregistered sequences are well-formed
    #[inline]
    pub fn validity(&self, sequence: &str) -> Validity {
        self.entries
            .get(sequence)
            .copied()
            .unwrap_or(Validity::WellFormed)
    }

    /// Element count of the longest entry when split at ZWJ, 0 when empty
    #[inline]
    pub fn max_joined_elements(&self) -> usize {
        self.max_joined
    }

    /// Number of entries at exactly `validity`
    pub fn count(&self, validity: Validity) -> usize {
        self.entries.values().filter(|v| **v == validity).count()
    }
}

/// Expand a subdivision code like `gbsct` into its flag tag sequence
pub fn subdivision_to_sequence(code: &str) -> String {
    std::iter::once(BLACK_FLAG)
        .chain(
            code.bytes()
                .filter_map(|b| char::from_u32(TAG_OFFSET + u32::from(b))),
        )
        .chain(std::iter::once(CANCEL_TAG))
        .collect()
}
