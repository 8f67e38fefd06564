//! Byte-offset cursor over the scanned text

/// ZERO WIDTH JOINER
pub const ZWJ: char = '\u{200D}';
/// VARIATION SELECTOR-15, text presentation
pub const TEXT_SELECTOR: char = '\u{FE0E}';
/// VARIATION SELECTOR-16, emoji presentation
pub const EMOJI_SELECTOR: char = '\u{FE0F}';
/// COMBINING ENCLOSING KEYCAP
pub const KEYCAP: char = '\u{20E3}';
/// CANCEL TAG
pub const CANCEL_TAG: char = '\u{E007F}';

/// Tag characters allowed in a tag sequence payload
#[inline]
pub fn is_tag_spec(ch: char) -> bool {
    ('\u{E0020}'..='\u{E007E}').contains(&ch)
}

/// Whole tag block, payload and cancel tag
#[inline]
pub fn is_tag(ch: char) -> bool {
    is_tag_spec(ch) || ch == CANCEL_TAG
}

#[inline]
pub fn is_keycap_base(ch: char) -> bool {
    matches!(ch, '0'..='9' | '#' | '*')
}

/// Read-only view of the text addressed by byte offsets
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t> {
    text: &'t str,
}

impl<'t> Cursor<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Char at `pos` and the offset just past it
    ///
    /// `None` at the end of the text or off a char boundary.
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<(char, usize)> {
        let ch = self.text.get(pos..)?.chars().next()?;
        Some((ch, pos + ch.len_utf8()))
    }

    #[inline]
    pub fn peek(&self, pos: usize) -> Option<char> {
        self.char_at(pos).map(|(ch, _)| ch)
    }

    /// Consume `expected` at `pos`, returning the offset past it
    #[inline]
    pub fn eat(&self, pos: usize, expected: char) -> Option<usize> {
        match self.char_at(pos) {
            Some((ch, next)) if ch == expected => Some(next),
            _ => None,
        }
    }

    /// Consume a run of chars satisfying `pred`, returning the end and count
    pub fn eat_while(&self, mut pos: usize, pred: impl Fn(char) -> bool) -> (usize, usize) {
        let mut count = 0;
        while let Some((ch, next)) = self.char_at(pos) {
            if !pred(ch) {
                break;
            }
            pos = next;
            count += 1;
        }
        (pos, count)
    }

    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.text[start..end]
    }
}
