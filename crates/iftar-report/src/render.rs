//! Aggregation results to display lines.

use std::collections::BTreeMap;

use iftar_model::{AggregationResult, ItemSpiceKey, RenderedReport};

/// `"<item>: <spice> x<count>"`
pub fn food_line(key: &ItemSpiceKey, count: usize) -> String {
    format!("{}: {} x{count}", key.item, key.spice)
}

/// `"<drink> x<count>"`
pub fn drink_line(drink: &str, count: usize) -> String {
    format!("{drink} x{count}")
}

/// `"<item> MEAL x<count>"`
pub fn meal_line(item: &str, count: usize) -> String {
    format!("{item} MEAL x{count}")
}

/// `"<item> x<count>"`
pub fn non_meal_line(item: &str, count: usize) -> String {
    format!("{item} x{count}")
}

fn lines<K>(counts: &BTreeMap<K, usize>, format_line: impl Fn(&K, usize) -> String) -> Vec<String> {
    counts
        .iter()
        .map(|(key, count)| format_line(key, *count))
        .collect()
}

/// Renders every category of `result` in key order.
///
/// Maps are ordered by their keys, so the lines come out sorted by item
/// (food: by the composite `item||spice` text) without a separate sort.
/// Keys compare by UTF-8 bytes; see [`ItemSpiceKey`] for where that
/// differs from a UTF-16 sort.
/// Breakdown lists stay empty for gender scopes.
pub fn render(result: &AggregationResult) -> RenderedReport {
    let (meal_breakdown, non_meal_breakdown) = match &result.breakdown {
        Some(breakdown) => (
            lines(&breakdown.meal_by_item, |item, count| meal_line(item, count)),
            lines(&breakdown.non_meal_by_item, |item, count| non_meal_line(item, count)),
        ),
        None => (Vec::new(), Vec::new()),
    };
    RenderedReport {
        food: lines(&result.item_spice_counts, food_line),
        drinks: lines(&result.drink_counts, |drink, count| drink_line(drink, count)),
        meal_breakdown,
        non_meal_breakdown,
    }
}
