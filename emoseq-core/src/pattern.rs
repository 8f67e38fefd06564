//! Scanning patterns over the grammar matcher
//!
//! An [`EmojiPattern`] behaves like a compiled regular expression for one
//! level: it finds the first match, anchors at an offset, or iterates over
//! all non-overlapping matches left to right. Offsets are byte offsets into
//! the haystack.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::data::EmojiData;
use crate::grammar::Matcher;
use crate::types::{Level, SequenceKind, Validity};

/// Emoji sequence pattern for one level
#[derive(Debug, Clone, Copy)]
pub struct EmojiPattern<'d> {
    matcher: Matcher<'d>,
}

/// A matched emoji sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
    kind: SequenceKind,
    validity: Validity,
}

impl<'t> EmojiMatch<'t> {
    /// The matched text
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Registered validity; kinds without a registry report `Recommended`
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Codepoints of the match in order
    pub fn codepoints(&self) -> std::str::Chars<'t> {
        self.as_str().chars()
    }
}

impl<'d> EmojiPattern<'d> {
    /// Pattern over a custom data provider
    pub fn new(data: &'d dyn EmojiData, level: Level) -> Self {
        Self {
            matcher: Matcher::new(data, level),
        }
    }

    pub fn level(&self) -> Level {
        self.matcher.level()
    }

    /// First match anywhere in `text`
    pub fn find<'t>(&self, text: &'t str) -> Option<EmojiMatch<'t>> {
        self.find_at(text, 0)
    }

    /// First match starting at or after byte offset `start`
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<EmojiMatch<'t>> {
        let rest = text.get(start..)?;
        rest.char_indices()
            .find_map(|(offset, _)| self.match_at(text, start + offset))
    }

    /// Match anchored exactly at byte offset `start`
    pub fn match_at<'t>(&self, text: &'t str, start: usize) -> Option<EmojiMatch<'t>> {
        self.matcher
            .match_at(text, start)
            .map(|candidate| EmojiMatch {
                haystack: text,
                start,
                end: candidate.end,
                kind: candidate.kind,
                validity: candidate.validity,
            })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Lazy iterator over non-overlapping matches, left to right
    pub fn find_iter<'t>(&self, text: &'t str) -> Matches<'d, 't> {
        Matches {
            pattern: *self,
            text,
            pos: Some(0),
        }
    }

    /// Matched strings of every non-overlapping match
    pub fn scan<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find_iter(text).map(|m| m.as_str()).collect()
    }
}

#[cfg(feature = "embedded")]
impl EmojiPattern<'static> {
    /// Pattern over the bundled data
    pub fn embedded(level: Level) -> crate::Result<Self> {
        Ok(Self::new(crate::data::embedded_tables()?, level))
    }

    pub fn any() -> crate::Result<Self> {
        Self::embedded(Level::Any)
    }

    pub fn basic() -> crate::Result<Self> {
        Self::embedded(Level::Basic)
    }

    pub fn text() -> crate::Result<Self> {
        Self::embedded(Level::Text)
    }

    pub fn well_formed() -> crate::Result<Self> {
        Self::embedded(Level::WellFormed)
    }

    pub fn valid() -> crate::Result<Self> {
        Self::embedded(Level::Valid)
    }

    pub fn recommended() -> crate::Result<Self> {
        Self::embedded(Level::Recommended)
    }
}

/// Iterator returned by [`EmojiPattern::find_iter`]
#[derive(Debug, Clone)]
pub struct Matches<'d, 't> {
    pattern: EmojiPattern<'d>,
    text: &'t str,
    /// `None` once exhausted
    pos: Option<usize>,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = EmojiMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;
        match self.pattern.find_at(self.text, pos) {
            Some(m) => {
                self.pos = Some(m.end());
                Some(m)
            }
            None => {
                self.pos = None;
                None
            }
        }
    }
}

impl FusedIterator for Matches<'_, '_> {}
