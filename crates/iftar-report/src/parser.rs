//! Line-item parsing.
//!
//! A line item is `"<item>/<spice>/<drink>"`, optionally with a `MEAL:`
//! marker in front of the item. Segments after the third are ignored.

use std::sync::LazyLock;

use iftar_model::LineItem;
use regex::Regex;

/// Separator between line-item segments.
pub const SEGMENT_DELIMITER: char = '/';

static MEAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^meal:\s*")
        .unwrap_or_else(|error| panic!("meal prefix pattern is invalid: {error}"))
});

/// Splits a `MEAL:` marker off an item name.
///
/// Returns the canonical name and whether the marker was present.
pub fn strip_meal_prefix(item: &str) -> (&str, bool) {
    match MEAL_PREFIX.find(item) {
        Some(marker) => (item[marker.end()..].trim(), true),
        None => (item, false),
    }
}

/// Parses a raw line item. Returns `None` for anything with fewer than
/// three segments, including the empty string.
pub fn parse_line_item(raw: &str) -> Option<LineItem> {
    let mut segments = raw.split(SEGMENT_DELIMITER);
    let item = segments.next()?.trim();
    let spice = segments.next()?.trim();
    let drink = segments.next()?.trim();
    let (item_name, is_meal) = strip_meal_prefix(item);
    Some(LineItem {
        item_name: item_name.to_string(),
        spice_level: spice.to_string(),
        drink: drink.to_string(),
        is_meal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_meal_line_item() {
        let item = parse_line_item("MEAL: Chicken Biryani/Medium/Water").expect("parsed");
        assert_eq!(item, LineItem {
            item_name: "Chicken Biryani".to_string(),
            spice_level: "Medium".to_string(),
            drink: "Water".to_string(),
            is_meal: true,
        });
    }

    #[test]
    fn parses_plain_line_item_and_ignores_extra_segments() {
        let item = parse_line_item(" Burger / Hot / Cola /large/extra").expect("parsed");
        assert_eq!(item.item_name, "Burger");
        assert_eq!(item.spice_level, "Hot");
        assert_eq!(item.drink, "Cola");
        assert!(!item.is_meal);
    }

    #[test]
    fn meal_marker_is_case_insensitive_and_optional_space() {
        assert_eq!(strip_meal_prefix("meal:Wrap"), ("Wrap", true));
        assert_eq!(strip_meal_prefix("Meal:   Wrap "), ("Wrap", true));
        assert_eq!(strip_meal_prefix("MEAL :Wrap"), ("MEAL :Wrap", false));
        assert_eq!(strip_meal_prefix("Oatmeal: Wrap"), ("Oatmeal: Wrap", false));
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(parse_line_item("JustOneField"), None);
        assert_eq!(parse_line_item("Burger/Hot"), None);
        assert_eq!(parse_line_item(""), None);
    }

    #[test]
    fn keeps_empty_segments() {
        let item = parse_line_item("Burger//").expect("parsed");
        assert_eq!(item.spice_level, "");
        assert_eq!(item.drink, "");
    }

    #[test]
    fn bare_meal_marker_leaves_empty_name() {
        let item = parse_line_item("MEAL: /Hot/Cola").expect("parsed");
        assert_eq!(item.item_name, "");
        assert!(item.is_meal);
    }
}
