//! Single-codepoint property classification

use crate::data::EmojiData;
use crate::types::Property;

/// Emoji properties of one codepoint, in canonical order
///
/// Returns `None` rather than an empty list when the codepoint holds none
/// of the classified properties.
pub fn classify_char(data: &dyn EmojiData, ch: char) -> Option<Vec<Property>> {
    let held = data.properties(ch);
    let properties: Vec<Property> = Property::CLASSIFIED
        .into_iter()
        .filter(|p| held.contains(*p))
        .collect();

    (!properties.is_empty()).then_some(properties)
}

/// Classify the first codepoint of `input`; the rest is ignored
pub fn classify(data: &dyn EmojiData, input: &str) -> Option<Vec<Property>> {
    input.chars().next().and_then(|ch| classify_char(data, ch))
}
