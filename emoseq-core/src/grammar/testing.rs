//! Synthetic data provider for matcher unit tests

use crate::data::EmojiData;
use crate::types::{Property, PropertySet, Validity};

use Property::*;

/// A handful of codepoints with hand-picked properties
pub(crate) struct SyntheticData;

impl SyntheticData {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn set(properties: &[Property]) -> PropertySet {
    properties.iter().copied().collect()
}

impl EmojiData for SyntheticData {
    fn properties(&self, ch: char) -> PropertySet {
        match ch {
            '0'..='9' | '#' | '*' => set(&[Emoji, EmojiComponent]),
            '\u{200D}' | '\u{20E3}' | '\u{FE0F}' | '\u{E0020}'..='\u{E007F}' => {
                set(&[EmojiComponent])
            }
            '▶' => set(&[Emoji]),
            '✌' => set(&[Emoji, EmojiModifierBase]),
            '🇦'..='🇿' => set(&[Emoji, EmojiPresentation, EmojiComponent, RegionalIndicator]),
            '🏻'..='🏿' => set(&[Emoji, EmojiPresentation, EmojiModifier, EmojiComponent]),
            '🦰' => set(&[Emoji, EmojiPresentation, EmojiComponent]),
            '🛌' | '👨' | '👩' | '👧' => set(&[Emoji, EmojiPresentation, EmojiModifierBase]),
            '😴' | '🌵' | '🤠' | '🤢' | '🏴' => set(&[Emoji, EmojiPresentation]),
            _ => PropertySet::EMPTY,
        }
    }

    fn flag_validity(&self, first: char, second: char) -> Validity {
        match (first, second) {
            ('🇵', '🇹') => Validity::Recommended,
            ('🇸', '🇺') => Validity::Valid,
            _ => Validity::WellFormed,
        }
    }

    fn tag_sequence_validity(&self, sequence: &str) -> Validity {
        match sequence {
            "🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}" => Validity::Recommended,
            _ => Validity::WellFormed,
        }
    }

    fn zwj_sequence_validity(&self, sequence: &str) -> Validity {
        match sequence {
            "👨\u{200D}👩" => Validity::Recommended,
            _ => Validity::WellFormed,
        }
    }

    fn max_zwj_elements(&self) -> usize {
        2
    }
}
