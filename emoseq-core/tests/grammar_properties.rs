//! Property-based checks of the matching invariants

use emoseq_core::{EmojiPattern, Level};
use proptest::prelude::*;

/// Codepoints that exercise every production, plus some plain text
const ALPHABET: &[&str] = &[
    "a", " ", "2", "#", "😴", "▶", "✌", "♀", "🛌", "🤾", "🤠", "🤢", "🏴", "👨", "👩",
    "🏽", "🏻", "🇵", "🇹", "🇺", "\u{200D}", "\u{FE0E}", "\u{FE0F}", "\u{20E3}",
    "\u{E0067}", "\u{E0062}", "\u{E0073}", "\u{E0063}", "\u{E0074}", "\u{E007F}",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24).prop_map(|parts| parts.concat())
}

fn pattern(level: Level) -> EmojiPattern<'static> {
    EmojiPattern::embedded(level).unwrap()
}

fn char_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices().map(|(i, _)| i)
}

proptest! {
    #[test]
    fn span_is_idempotent(text in text_strategy()) {
        for level in Level::ALL {
            let pattern = pattern(level);
            for m in pattern.find_iter(&text) {
                let rematch = pattern.match_at(m.as_str(), 0);
                prop_assert_eq!(rematch.map(|r| r.end()), Some(m.as_str().len()));
                prop_assert_eq!(rematch.map(|r| r.kind()), Some(m.kind()));
            }
        }
    }

    #[test]
    fn strictness_is_monotonic(text in text_strategy()) {
        let chain = [
            pattern(Level::Recommended),
            pattern(Level::Valid),
            pattern(Level::WellFormed),
        ];
        for start in char_starts(&text) {
            for pair in chain.windows(2) {
                if let Some(strict) = pair[0].match_at(&text, start) {
                    let loose = pair[1].match_at(&text, start);
                    prop_assert!(loose.is_some());
                    prop_assert!(loose.map(|m| m.end()).unwrap_or(0) >= strict.end());
                }
            }
        }
    }

    #[test]
    fn basic_and_text_stay_single_element(text in text_strategy()) {
        for level in [Level::Basic, Level::Text] {
            for m in pattern(level).find_iter(&text) {
                prop_assert!(!m.as_str().contains('\u{200D}'), "match contains ZWJ");
                prop_assert!(m.codepoints().count() <= 2);
            }
        }
    }

    #[test]
    fn fallback_never_over_consumes(text in text_strategy()) {
        let strict = pattern(Level::Recommended);
        let loose = pattern(Level::WellFormed);
        for start in char_starts(&text) {
            if let (Some(s), Some(l)) = (strict.match_at(&text, start), loose.match_at(&text, start)) {
                // The stricter match is a prefix of the looser one
                prop_assert!(l.as_str().starts_with(s.as_str()));
            }
        }
    }

    #[test]
    fn matches_are_ordered_and_disjoint(text in text_strategy()) {
        for level in Level::ALL {
            let mut last_end = 0;
            for m in pattern(level).find_iter(&text) {
                prop_assert!(m.start() >= last_end);
                prop_assert!(m.end() > m.start());
                prop_assert!(text.is_char_boundary(m.end()));
                last_end = m.end();
            }
        }
    }
}
