//! TOML schema for the emoji data files
//!
//! Each file is deserialized into one of these structures and validated
//! before any runtime table is built from it.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::types::Property;

/// Version stamp shared by all data files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
}

/// `properties.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesConfig {
    pub metadata: Metadata,
    pub properties: PropertyRanges,
}

/// Codepoint ranges per property, in emoji-data.txt notation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRanges {
    pub emoji: Vec<String>,
    pub emoji_presentation: Vec<String>,
    pub emoji_modifier: Vec<String>,
    pub emoji_modifier_base: Vec<String>,
    pub emoji_component: Vec<String>,
    #[serde(default = "default_regional_indicator")]
    pub regional_indicator: Vec<String>,
}

/// `sequences.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencesConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub flags: SequenceLists,
    #[serde(default)]
    pub tags: SequenceLists,
    #[serde(default)]
    pub zwj: SequenceLists,
}

/// Recommended entries plus entries that are valid but not recommended
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceLists {
    #[serde(default)]
    pub recommended: Vec<String>,
    #[serde(default)]
    pub valid: Vec<String>,
}

impl SequenceLists {
    /// All entries, recommended first
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.recommended.iter().chain(self.valid.iter())
    }
}

/// `catalogue.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub legacy: Legacy,
    #[serde(rename = "group", default)]
    pub groups: Vec<GroupConfig>,
}

/// Category names from earlier catalogue editions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Legacy {
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub subgroups: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(rename = "subgroup", default)]
    pub subgroups: Vec<SubgroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgroupConfig {
    pub name: String,
    pub emoji: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_regional_indicator() -> Vec<String> {
    vec!["1F1E6..1F1FF".to_string()]
}

/// ISO 3166-2 subdivision code as used in tag sequences
const SUBDIVISION_PATTERN: &str = r"^[a-z]{2}[a-z0-9]{1,4}$";

/// Parse `"1F600"` or `"1F600..1F64F"` into an inclusive range
pub(crate) fn parse_range(entry: &str) -> Result<(u32, u32)> {
    let invalid = || DataError::InvalidRange(entry.to_string());
    let parse = |s: &str| u32::from_str_radix(s.trim(), 16).map_err(|_| invalid());

    let (lo, hi) = match entry.split_once("..") {
        Some((lo, hi)) => (parse(lo)?, parse(hi)?),
        None => {
            let cp = parse(entry)?;
            (cp, cp)
        }
    };

    if lo > hi || hi > 0x10FFFF {
        return Err(invalid());
    }
    Ok((lo, hi))
}

/// Parse space-separated hexadecimal codepoints into a string
pub(crate) fn parse_codepoints(entry: &str) -> Result<String> {
    entry
        .split_whitespace()
        .map(|hex| {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| DataError::InvalidSequence(entry.to_string()))
        })
        .collect()
}

impl PropertiesConfig {
    /// Entries of every property array, keyed by property
    pub(crate) fn named_ranges(&self) -> [(Property, &[String]); 6] {
        let p = &self.properties;
        [
            (Property::Emoji, p.emoji.as_slice()),
            (Property::EmojiPresentation, p.emoji_presentation.as_slice()),
            (Property::EmojiModifier, p.emoji_modifier.as_slice()),
            (Property::EmojiModifierBase, p.emoji_modifier_base.as_slice()),
            (Property::EmojiComponent, p.emoji_component.as_slice()),
            (Property::RegionalIndicator, p.regional_indicator.as_slice()),
        ]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (_, entries) in self.named_ranges() {
            for entry in entries {
                parse_range(entry)?;
            }
        }
        if self.properties.emoji.is_empty() {
            return Err(DataError::InvalidRange("empty emoji property".to_string()));
        }
        Ok(())
    }
}

impl SequencesConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        for code in self.flags.iter() {
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(DataError::InvalidRegion(code.clone()));
            }
        }

        let pattern = Regex::new(SUBDIVISION_PATTERN)
            .map_err(|e| DataError::InvalidSubdivision(e.to_string()))?;
        for code in self.tags.iter() {
            if !pattern.is_match(code) {
                return Err(DataError::InvalidSubdivision(code.clone()));
            }
        }

        for entry in self.zwj.iter() {
            let seq = parse_codepoints(entry)?;
            if !seq.contains('\u{200D}') {
                return Err(DataError::InvalidSequence(entry.clone()));
            }
        }
        Ok(())
    }
}

impl CatalogueConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        let mut groups = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(DataError::InvalidCatalogue("empty group name".to_string()));
            }
            if !groups.insert(group.name.as_str()) {
                return Err(DataError::InvalidCatalogue(format!(
                    "duplicate group '{}'",
                    group.name
                )));
            }

            let mut subgroups = HashSet::new();
            for subgroup in &group.subgroups {
                if subgroup.name.trim().is_empty() {
                    return Err(DataError::InvalidCatalogue(format!(
                        "empty subgroup name in '{}'",
                        group.name
                    )));
                }
                if !subgroups.insert(subgroup.name.as_str()) {
                    return Err(DataError::InvalidCatalogue(format!(
                        "duplicate subgroup '{}' in '{}'",
                        subgroup.name, group.name
                    )));
                }
            }
        }
        Ok(())
    }
}
