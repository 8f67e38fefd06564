//! Region flag validity

use std::collections::HashMap;

use crate::types::Validity;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Registered regional indicator pairs
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    pairs: HashMap<(char, char), Validity>,
}

impl FlagTable {
    /// Build from region codes such as `"PT"`; codes must already be validated
    pub fn new<'a>(
        recommended: impl IntoIterator<Item = &'a str>,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut pairs = HashMap::new();
        for code in valid {
            if let Some(pair) = region_to_pair(code) {
                pairs.insert(pair, Validity::Valid);
            }
        }
        // Recommended wins when a code is listed twice
        for code in recommended {
            if let Some(pair) = region_to_pair(code) {
                pairs.insert(pair, Validity::Recommended);
            }
        }
        Self { pairs }
    }

    /// Validity of the flag spelled by two regional indicators
    #[inline]
    pub fn validity(&self, first: char, second: char) -> Validity {
        self.pairs
            .get(&(first, second))
            .copied()
            .unwrap_or(Validity::WellFormed)
    }

    /// Number of registered pairs at exactly `validity`
    pub fn count(&self, validity: Validity) -> usize {
        self.pairs.values().filter(|v| **v == validity).count()
    }
}

/// Map `"PT"` to its regional indicator pair
pub fn region_to_pair(code: &str) -> Option<(char, char)> {
    let mut letters = code.bytes().map(|b| {
        b.is_ascii_uppercase()
            .then(|| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
            .flatten()
    });
    match (letters.next(), letters.next(), letters.next()) {
        (Some(Some(a)), Some(Some(b)), None) => Some((a, b)),
        _ => None,
    }
}
