//! Runtime implementation of the emoji data provider
//!
//! Bridges the validated TOML configuration and the lookup interface.

use tracing::debug;

use crate::data::{
    config::{parse_codepoints, parse_range, PropertiesConfig, SequencesConfig},
    interface::EmojiData,
    tables::{sequence::subdivision_to_sequence, FlagTable, PropertyTable, SequenceTable},
};
use crate::error::Result;
use crate::types::{Property, PropertySet, Validity};

/// Emoji tables built from configuration
#[derive(Debug, Clone)]
pub struct EmojiTables {
    properties_version: String,
    sequences_version: String,
    properties: PropertyTable,
    flags: FlagTable,
    tags: SequenceTable,
    zwj: SequenceTable,
}

/// Entry counts, reported by `validate-data` and debug logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct TableStats {
    pub emoji: usize,
    pub emoji_presentation: usize,
    pub emoji_modifier_base: usize,
    pub flags_recommended: usize,
    pub flags_valid: usize,
    pub tags_recommended: usize,
    pub tags_valid: usize,
    pub zwj_recommended: usize,
    pub zwj_valid: usize,
}

impl EmojiTables {
    /// Create from parsed configuration
    pub fn from_config(properties: &PropertiesConfig, sequences: &SequencesConfig) -> Result<Self> {
        properties.validate()?;
        sequences.validate()?;

        let mut parsed: Vec<(Property, Vec<(u32, u32)>)> = Vec::with_capacity(6);
        for (property, entries) in properties.named_ranges() {
            let ranges = entries
                .iter()
                .map(|entry| parse_range(entry))
                .collect::<Result<Vec<_>>>()?;
            parsed.push((property, ranges));
        }
        let property_table =
            PropertyTable::new(parsed.iter().map(|(p, ranges)| (*p, ranges.as_slice())));

        let flags = FlagTable::new(
            sequences.flags.recommended.iter().map(String::as_str),
            sequences.flags.valid.iter().map(String::as_str),
        );

        let tags = SequenceTable::new(
            sequences
                .tags
                .recommended
                .iter()
                .map(|code| subdivision_to_sequence(code)),
            sequences
                .tags
                .valid
                .iter()
                .map(|code| subdivision_to_sequence(code)),
        );

        let zwj = SequenceTable::new(
            sequences
                .zwj
                .recommended
                .iter()
                .map(|entry| parse_codepoints(entry))
                .collect::<Result<Vec<_>>>()?,
            sequences
                .zwj
                .valid
                .iter()
                .map(|entry| parse_codepoints(entry))
                .collect::<Result<Vec<_>>>()?,
        );

        let tables = Self {
            properties_version: properties.metadata.version.clone(),
            sequences_version: sequences.metadata.version.clone(),
            properties: property_table,
            flags,
            tags,
            zwj,
        };

        debug!(
            properties_version = %tables.properties_version,
            sequences_version = %tables.sequences_version,
            stats = ?tables.stats(),
            "built emoji tables"
        );
        Ok(tables)
    }

    /// Unicode version of the property data
    pub fn properties_version(&self) -> &str {
        &self.properties_version
    }

    /// Unicode Emoji version of the sequence data
    pub fn sequences_version(&self) -> &str {
        &self.sequences_version
    }

    /// Entry counts per table
    pub fn stats(&self) -> TableStats {
        TableStats {
            emoji: self.properties.count(Property::Emoji),
            emoji_presentation: self.properties.count(Property::EmojiPresentation),
            emoji_modifier_base: self.properties.count(Property::EmojiModifierBase),
            flags_recommended: self.flags.count(Validity::Recommended),
            flags_valid: self.flags.count(Validity::Valid),
            tags_recommended: self.tags.count(Validity::Recommended),
            tags_valid: self.tags.count(Validity::Valid),
            zwj_recommended: self.zwj.count(Validity::Recommended),
            zwj_valid: self.zwj.count(Validity::Valid),
        }
    }
}

impl EmojiData for EmojiTables {
    #[inline]
    fn properties(&self, ch: char) -> PropertySet {
        self.properties.get(ch)
    }

    #[inline]
    fn flag_validity(&self, first: char, second: char) -> Validity {
        self.flags.validity(first, second)
    }

    #[inline]
    fn tag_sequence_validity(&self, sequence: &str) -> Validity {
        self.tags.validity(sequence)
    }

    #[inline]
    fn zwj_sequence_validity(&self, sequence: &str) -> Validity {
        self.zwj.validity(sequence)
    }

    #[inline]
    fn max_zwj_elements(&self) -> usize {
        self.zwj.max_joined_elements()
    }
}
