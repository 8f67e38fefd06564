//! Codepoint property lookup with O(log n) range search
//!
//! ASCII has a direct array; everything else goes through sorted,
//! merged range vectors, one per property.

use crate::types::{Property, PropertySet};

/// Per-codepoint emoji property table
#[derive(Debug, Clone)]
pub struct PropertyTable {
    /// Property sets for chars 0-127
    ascii_table: [PropertySet; 128],
    /// Sorted, non-overlapping ranges indexed by `Property as usize`
    ranges: [Vec<(u32, u32)>; 6],
}

impl PropertyTable {
    /// Build from inclusive ranges per property
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Property, &'a [(u32, u32)])>,
    {
        let mut ranges: [Vec<(u32, u32)>; 6] = Default::default();
        for (property, list) in entries {
            ranges[property as usize].extend_from_slice(list);
        }
        for list in ranges.iter_mut() {
            merge_ranges(list);
        }

        let mut ascii_table = [PropertySet::EMPTY; 128];
        for property in Property::ALL {
            for &(lo, hi) in &ranges[property as usize] {
                for cp in lo..=hi.min(127) {
                    ascii_table[cp as usize].insert(property);
                }
            }
        }

        Self {
            ascii_table,
            ranges,
        }
    }

    /// Properties held by `ch` - hot path
    #[inline]
    pub fn get(&self, ch: char) -> PropertySet {
        if ch.is_ascii() {
            return self.ascii_table[ch as usize];
        }

        let cp = ch as u32;
        let mut set = PropertySet::EMPTY;
        for property in Property::ALL {
            if contains(&self.ranges[property as usize], cp) {
                set.insert(property);
            }
        }
        set
    }

    /// Number of codepoints holding `property`
    pub fn count(&self, property: Property) -> usize {
        self.ranges[property as usize]
            .iter()
            .map(|&(lo, hi)| (hi - lo + 1) as usize)
            .sum()
    }
}

fn contains(ranges: &[(u32, u32)], cp: u32) -> bool {
    let idx = ranges.partition_point(|&(_, hi)| hi < cp);
    ranges.get(idx).is_some_and(|&(lo, _)| lo <= cp)
}

/// Sort and coalesce overlapping or adjacent ranges
fn merge_ranges(ranges: &mut Vec<(u32, u32)>) {
    ranges.sort_unstable();
    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for &(lo, hi) in ranges.iter() {
        match merged.last_mut() {
            Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    *ranges = merged;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PropertyTable {
        PropertyTable::new([
            (Property::Emoji, &[(0x23, 0x23), (0x30, 0x39), (0x1F600, 0x1F64F)][..]),
            (Property::EmojiPresentation, &[(0x1F600, 0x1F64F)][..]),
            (Property::EmojiComponent, &[(0x23, 0x23), (0x30, 0x39)][..]),
        ])
    }

    #[test]
    fn test_ascii_lookup() {
        let table = table();
        let digit = table.get('7');
        assert!(digit.contains(Property::Emoji));
        assert!(digit.contains(Property::EmojiComponent));
        assert!(!digit.contains(Property::EmojiPresentation));
        assert!(table.get('a').is_empty());
    }

    #[test]
    fn test_range_lookup() {
        let table = table();
        let grin = table.get('😀');
        assert!(grin.contains(Property::Emoji));
        assert!(grin.contains(Property::EmojiPresentation));
        assert!(table.get('\u{1F650}').is_empty());
        assert!(table.get('\u{1F5FF}').is_empty());
    }

    #[test]
    fn test_merge_ranges() {
        let mut ranges = vec![(10, 12), (1, 3), (4, 5), (11, 20)];
        merge_ranges(&mut ranges);
        assert_eq!(ranges, vec![(1, 5), (10, 20)]);
    }

    #[test]
    fn test_count() {
        let table = table();
        assert_eq!(table.count(Property::EmojiComponent), 11);
        assert_eq!(table.count(Property::EmojiModifier), 0);
    }
}
