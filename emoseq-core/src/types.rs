//! Shared value types: properties, grammar levels, sequence kinds

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Unicode emoji character property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Property {
    /// `Emoji`
    Emoji,
    /// `Emoji_Presentation`: renders as emoji by default
    EmojiPresentation,
    /// `Emoji_Modifier`: the five skin tone modifiers
    EmojiModifier,
    /// `Emoji_Modifier_Base`: accepts a following skin tone modifier
    EmojiModifierBase,
    /// `Emoji_Component`: used inside sequences
    EmojiComponent,
    /// `Regional_Indicator`: flag letters
    RegionalIndicator,
}

impl Property {
    /// Properties reported by the classifier, in canonical order
    pub const CLASSIFIED: [Property; 5] = [
        Property::Emoji,
        Property::EmojiPresentation,
        Property::EmojiModifier,
        Property::EmojiModifierBase,
        Property::EmojiComponent,
    ];

    /// Every property known to the data tables
    pub const ALL: [Property; 6] = [
        Property::Emoji,
        Property::EmojiPresentation,
        Property::EmojiModifier,
        Property::EmojiModifierBase,
        Property::EmojiComponent,
        Property::RegionalIndicator,
    ];

    /// Property name as spelled in the Unicode character database
    pub fn name(&self) -> &'static str {
        match self {
            Property::Emoji => "Emoji",
            Property::EmojiPresentation => "Emoji_Presentation",
            Property::EmojiModifier => "Emoji_Modifier",
            Property::EmojiModifierBase => "Emoji_Modifier_Base",
            Property::EmojiComponent => "Emoji_Component",
            Property::RegionalIndicator => "Regional_Indicator",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of properties held by one codepoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertySet(u8);

impl PropertySet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a property
    #[inline]
    pub fn insert(&mut self, property: Property) {
        self.0 |= property.bit();
    }

    /// Builder-style variant of [`insert`](Self::insert)
    #[inline]
    pub const fn with(self, property: Property) -> Self {
        Self(self.0 | property.bit())
    }

    /// Check membership
    #[inline]
    pub const fn contains(self, property: Property) -> bool {
        self.0 & property.bit() != 0
    }

    /// True when the codepoint holds no emoji-related property
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over held properties in canonical order
    pub fn iter(self) -> impl Iterator<Item = Property> {
        Property::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// How strongly a sequence is registered
///
/// Ordered from weakest to strongest, so a level's policy is a plain
/// comparison against [`Level::required_validity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Validity {
    /// Structurally correct only
    WellFormed,
    /// Listed in a validity table
    Valid,
    /// Recommended for general interchange
    Recommended,
}

impl Validity {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::WellFormed => "well-formed",
            Validity::Valid => "valid",
            Validity::Recommended => "recommended",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammar strictness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// Any emoji-related codepoint, one at a time
    Any,
    /// Singletons and presentation-selected singletons only
    Basic,
    /// Text-presentation emoji only
    Text,
    /// Every structurally correct sequence
    WellFormed,
    /// Sequences found in the validity tables
    Valid,
    /// Sequences recommended for interchange
    #[default]
    Recommended,
}

impl Level {
    /// All levels from loosest to strictest
    pub const ALL: [Level; 6] = [
        Level::Any,
        Level::Basic,
        Level::Text,
        Level::WellFormed,
        Level::Valid,
        Level::Recommended,
    ];

    /// Lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Any => "any",
            Level::Basic => "basic",
            Level::Text => "text",
            Level::WellFormed => "well-formed",
            Level::Valid => "valid",
            Level::Recommended => "recommended",
        }
    }

    /// Minimum validity accepted for flag, tag and ZWJ sequences
    ///
    /// `None` for levels that never attempt those sequences.
    pub fn required_validity(&self) -> Option<Validity> {
        match self {
            Level::Any | Level::Basic | Level::Text => None,
            Level::WellFormed => Some(Validity::WellFormed),
            Level::Valid => Some(Validity::Valid),
            Level::Recommended => Some(Validity::Recommended),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "any" => Ok(Level::Any),
            "basic" => Ok(Level::Basic),
            "text" => Ok(Level::Text),
            "well-formed" | "wellformed" => Ok(Level::WellFormed),
            "valid" => Ok(Level::Valid),
            "recommended" => Ok(Level::Recommended),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// Grammar production a match was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceKind {
    /// One emoji codepoint
    Singleton,
    /// Emoji followed by a variation selector
    PresentationSequence,
    /// Modifier base followed by a skin tone modifier
    ModifierSequence,
    /// Digit, `#` or `*` with the enclosing keycap mark
    KeycapSequence,
    /// Pair of regional indicators
    FlagSequence,
    /// Base, tag characters and cancel tag
    TagSequence,
    /// Elements joined by ZERO WIDTH JOINER
    ZwjSequence,
    /// Lone component codepoint (ANY level only)
    Component,
}

impl SequenceKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::Singleton => "singleton",
            SequenceKind::PresentationSequence => "presentation-sequence",
            SequenceKind::ModifierSequence => "modifier-sequence",
            SequenceKind::KeycapSequence => "keycap-sequence",
            SequenceKind::FlagSequence => "flag-sequence",
            SequenceKind::TagSequence => "tag-sequence",
            SequenceKind::ZwjSequence => "zwj-sequence",
            SequenceKind::Component => "component",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
