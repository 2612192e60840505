use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when an item/spice pair is shown as a single key.
pub const KEY_DELIMITER: &str = "||";

/// Food count key: canonical item name plus spice level.
///
/// Ordering follows the composite text `"<item>||<spice>"` compared
/// byte-wise, so the item is the primary key and the spice breaks ties.
/// Keys whose composite text coincides (an item containing `||`) are
/// still kept apart by a structural tiebreak.
///
/// Byte order matches UTF-16 code-unit order everywhere except between
/// characters above U+FFFF and those in U+E000..=U+FFFF: an emoji sorts
/// after a full-width letter here, but before it in a UTF-16 sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemSpiceKey {
    pub item: String,
    pub spice: String,
}

impl ItemSpiceKey {
    pub fn new(item: impl Into<String>, spice: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            spice: spice.into(),
        }
    }

    fn composite_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.item
            .bytes()
            .chain(KEY_DELIMITER.bytes())
            .chain(self.spice.bytes())
    }
}

impl Ord for ItemSpiceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.composite_bytes()
            .cmp(other.composite_bytes())
            .then_with(|| self.item.cmp(&other.item))
            .then_with(|| self.spice.cmp(&other.spice))
    }
}

impl PartialOrd for ItemSpiceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ItemSpiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.item, KEY_DELIMITER, self.spice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_item_then_spice() {
        let mut keys = vec![
            ItemSpiceKey::new("Zebra Wrap", "Mild"),
            ItemSpiceKey::new("Apple Wrap", "Mild"),
            ItemSpiceKey::new("Apple Wrap", "Hot"),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Apple Wrap||Hot", "Apple Wrap||Mild", "Zebra Wrap||Mild"]
        );
    }

    #[test]
    fn prefix_items_follow_composite_order() {
        // '|' sorts after ' ', so "Wrap X" comes before "Wrap" once the delimiter is appended.
        let short = ItemSpiceKey::new("Wrap", "Hot");
        let long = ItemSpiceKey::new("Wrap X", "Hot");
        assert!(long < short);
    }

    #[test]
    fn delimiter_in_item_does_not_collide() {
        let left = ItemSpiceKey::new("a||b", "c");
        let right = ItemSpiceKey::new("a", "b||c");
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
        assert_ne!(left.cmp(&right), Ordering::Equal);
    }

    #[test]
    fn supplementary_characters_sort_by_utf8_bytes() {
        let full_width = ItemSpiceKey::new("\u{FF21}", "Hot");
        let emoji = ItemSpiceKey::new("\u{1F32F}", "Hot");
        assert!(full_width < emoji);
    }
}
