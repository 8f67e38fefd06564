//! Maximal munch with validity fallback
//!
//! At each start position the matcher builds candidates from longest to
//! shortest production and returns the first one the level admits:
//!
//! 1. ZWJ chains, every element parsed maximally, from the full chain
//!    down to two elements
//! 2. tag sequence, region flag, modifier sequence, keycap sequence
//! 3. presentation sequence, then the bare singleton
//!
//! A rejected candidate never leaks codepoints into a shorter one, so
//! the suffix it would have consumed stays available to the next scan.

use smallvec::SmallVec;

use crate::data::EmojiData;
use crate::grammar::cursor::{
    is_keycap_base, is_tag, is_tag_spec, Cursor, CANCEL_TAG, EMOJI_SELECTOR, KEYCAP,
    TEXT_SELECTOR, ZWJ,
};
use crate::types::{Level, Property, PropertySet, SequenceKind, Validity};

/// One accepted production, relative to the start it was matched at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Byte offset just past the match
    pub end: usize,
    pub kind: SequenceKind,
    pub validity: Validity,
}

impl Candidate {
    #[inline]
    fn new(end: usize, kind: SequenceKind) -> Self {
        Self {
            end,
            kind,
            validity: Validity::Recommended,
        }
    }
}

/// Grammar matcher bound to one data provider and level
#[derive(Clone, Copy)]
pub struct Matcher<'d> {
    data: &'d dyn EmojiData,
    level: Level,
}

impl std::fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").field("level", &self.level).finish()
    }
}

impl<'d> Matcher<'d> {
    pub fn new(data: &'d dyn EmojiData, level: Level) -> Self {
        Self { data, level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn data(&self) -> &'d dyn EmojiData {
        self.data
    }

    /// Longest admissible sequence starting exactly at byte offset `start`
    pub fn match_at(&self, text: &str, start: usize) -> Option<Candidate> {
        let cursor = Cursor::new(text);
        let (ch, next) = cursor.char_at(start)?;

        match self.level.required_validity() {
            Some(required) => self.match_sequence(&cursor, start, ch, next, required),
            None => match self.level {
                Level::Any => self.match_any(ch, next),
                Level::Basic => self.match_basic(&cursor, ch, next),
                _ => self.match_text(&cursor, ch, next),
            },
        }
    }

    #[inline]
    fn props(&self, ch: char) -> PropertySet {
        self.data.properties(ch)
    }

    fn match_any(&self, ch: char, next: usize) -> Option<Candidate> {
        if ch == TEXT_SELECTOR || ch == EMOJI_SELECTOR || is_tag(ch) {
            return None;
        }

        let props = self.props(ch);
        let emoji = props.contains(Property::Emoji);
        let component =
            props.contains(Property::EmojiComponent) || props.contains(Property::RegionalIndicator);

        if emoji && !component {
            Some(Candidate::new(next, SequenceKind::Singleton))
        } else if emoji || component {
            Some(Candidate::new(next, SequenceKind::Component))
        } else {
            None
        }
    }

    fn match_basic(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        self.presentation(cursor, ch, next, true)
            .or_else(|| self.singleton(cursor, ch, next))
    }

    fn match_text(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        let props = self.props(ch);
        if !props.contains(Property::Emoji) || props.contains(Property::EmojiComponent) {
            return None;
        }

        if let Some(end) = cursor.eat(next, TEXT_SELECTOR) {
            return Some(Candidate::new(end, SequenceKind::PresentationSequence));
        }
        if props.contains(Property::EmojiPresentation) {
            return None;
        }

        match cursor.peek(next) {
            Some(EMOJI_SELECTOR) => None,
            Some(following)
                if props.contains(Property::EmojiModifierBase)
                    && self.props(following).contains(Property::EmojiModifier) =>
            {
                None
            }
            _ => Some(Candidate::new(next, SequenceKind::Singleton)),
        }
    }

    fn match_sequence(
        &self,
        cursor: &Cursor<'_>,
        start: usize,
        ch: char,
        next: usize,
        required: Validity,
    ) -> Option<Candidate> {
        if let Some(chain) = self.zwj(cursor, start, required) {
            return Some(chain);
        }

        [
            self.tag(cursor, start, ch, next),
            self.flag(cursor, ch, next),
            self.modifier(cursor, ch, next),
            self.keycap(cursor, ch, next),
            self.presentation(cursor, ch, next, true),
            self.singleton(cursor, ch, next),
        ]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.validity >= required)
    }

    // --- Productions ---

    fn zwj(&self, cursor: &Cursor<'_>, start: usize, required: Validity) -> Option<Candidate> {
        let first = self.element(cursor, start)?;
        let limit = self.data.max_zwj_elements();
        let mut chain: SmallVec<[Candidate; 8]> = SmallVec::new();
        chain.push(first);
        // Length of the prefix whose elements are all valid on their own
        let mut leading_valid = usize::from(first.validity >= Validity::Valid);

        // Past `limit` only well-formed chains and all-valid chains can match
        let mut end = first.end;
        while chain.len() < limit
            || required == Validity::WellFormed
            || (required == Validity::Valid && leading_valid == chain.len())
        {
            let Some(after_joiner) = cursor.eat(end, ZWJ) else {
                break;
            };
            let Some(element) = self.element(cursor, after_joiner) else {
                break;
            };
            if leading_valid == chain.len() && element.validity >= Validity::Valid {
                leading_valid += 1;
            }
            end = element.end;
            chain.push(element);
        }

        (2..=chain.len()).rev().find_map(|len| {
            let end = chain[len - 1].end;
            let all_valid = leading_valid >= len;
            let validity = if len <= limit {
                self.chain_validity(cursor.slice(start, end), all_valid)
            } else if all_valid {
                Validity::Valid
            } else {
                Validity::WellFormed
            };
            (validity >= required).then_some(Candidate {
                end,
                kind: SequenceKind::ZwjSequence,
                validity,
            })
        })
    }

    /// Registered validity, raised to `Valid` when every element is valid
    /// on its own and the data only knows the chain as well-formed
    fn chain_validity(&self, sequence: &str, all_valid: bool) -> Validity {
        let registered = self.data.zwj_sequence_validity(sequence);
        if registered == Validity::WellFormed && all_valid {
            Validity::Valid
        } else {
            registered
        }
    }

    /// One ZWJ element, parsed as the longest nested production
    fn element(&self, cursor: &Cursor<'_>, pos: usize) -> Option<Candidate> {
        let (ch, next) = cursor.char_at(pos)?;

        self.tag(cursor, pos, ch, next)
            .or_else(|| self.flag(cursor, ch, next))
            .or_else(|| self.modifier(cursor, ch, next))
            .or_else(|| self.keycap(cursor, ch, next))
            .or_else(|| self.presentation(cursor, ch, next, false))
            .or_else(|| {
                let props = self.props(ch);
                let component = props.contains(Property::EmojiComponent)
                    || props.contains(Property::RegionalIndicator);
                // Keycap bases only join as part of a keycap
                let joinable = props.contains(Property::Emoji)
                    && (!component || props.contains(Property::EmojiPresentation));
                // A lone component is never an emoji by itself
                let validity = if component {
                    Validity::WellFormed
                } else {
                    Validity::Recommended
                };
                joinable.then_some(Candidate {
                    end: next,
                    kind: SequenceKind::Singleton,
                    validity,
                })
            })
    }

    fn tag(&self, cursor: &Cursor<'_>, start: usize, ch: char, next: usize) -> Option<Candidate> {
        let base_end = self
            .modifier(cursor, ch, next)
            .or_else(|| self.presentation(cursor, ch, next, true))
            .map(|base| base.end)
            .or_else(|| {
                let props = self.props(ch);
                (props.contains(Property::Emoji) && !props.contains(Property::EmojiComponent))
                    .then_some(next)
            })?;

        let (spec_end, count) = cursor.eat_while(base_end, is_tag_spec);
        if count == 0 {
            return None;
        }
        let end = cursor.eat(spec_end, CANCEL_TAG)?;

        Some(Candidate {
            end,
            kind: SequenceKind::TagSequence,
            validity: self.data.tag_sequence_validity(cursor.slice(start, end)),
        })
    }

    fn flag(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        if !self.props(ch).contains(Property::RegionalIndicator) {
            return None;
        }
        let (second, end) = cursor.char_at(next)?;
        if !self.props(second).contains(Property::RegionalIndicator) {
            return None;
        }

        Some(Candidate {
            end,
            kind: SequenceKind::FlagSequence,
            validity: self.data.flag_validity(ch, second),
        })
    }

    fn modifier(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        if !self.props(ch).contains(Property::EmojiModifierBase) {
            return None;
        }
        let (modifier, end) = cursor.char_at(next)?;
        self.props(modifier)
            .contains(Property::EmojiModifier)
            .then(|| Candidate::new(end, SequenceKind::ModifierSequence))
    }

    fn keycap(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        if !is_keycap_base(ch) {
            return None;
        }
        let selector_end = cursor.eat(next, EMOJI_SELECTOR).unwrap_or(next);
        let end = cursor.eat(selector_end, KEYCAP)?;
        Some(Candidate::new(end, SequenceKind::KeycapSequence))
    }

    /// Emoji followed by VS16; standalone sequences exclude components
    fn presentation(
        &self,
        cursor: &Cursor<'_>,
        ch: char,
        next: usize,
        standalone: bool,
    ) -> Option<Candidate> {
        let props = self.props(ch);
        if !props.contains(Property::Emoji)
            || (standalone && props.contains(Property::EmojiComponent))
        {
            return None;
        }
        let end = cursor.eat(next, EMOJI_SELECTOR)?;
        Some(Candidate::new(end, SequenceKind::PresentationSequence))
    }

    /// Default-emoji codepoint not forced to text presentation
    fn singleton(&self, cursor: &Cursor<'_>, ch: char, next: usize) -> Option<Candidate> {
        let props = self.props(ch);
        let emoji_default = props.contains(Property::EmojiPresentation)
            && !props.contains(Property::EmojiComponent);
        (emoji_default && cursor.peek(next) != Some(TEXT_SELECTOR))
            .then(|| Candidate::new(next, SequenceKind::Singleton))
    }
}
