//! Order aggregation.
//!
//! One forward pass over the rows per scope. Each scope builds its own
//! maps; nothing is shared between the combined and gender passes.

use iftar_model::{AggregationResult, ItemSpiceKey, OrderRow, Scope};
use tracing::{debug, info};

use crate::parser::parse_line_item;

/// Why a row did or did not reach the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Meal,
    NonMeal,
    Refunded,
    GenderMismatch,
    Unparsable,
}

impl RowOutcome {
    pub fn is_counted(self) -> bool {
        matches!(self, Self::Meal | Self::NonMeal)
    }
}

/// Accumulates counts for one scope.
#[derive(Debug)]
pub struct Aggregator {
    result: AggregationResult,
}

impl Aggregator {
    pub fn new(scope: Scope) -> Self {
        Self {
            result: AggregationResult::empty(scope),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.result.scope
    }

    /// Adds one row. Malformed rows are skipped, never rejected.
    pub fn push(&mut self, row: &OrderRow) -> RowOutcome {
        let outcome = self.classify_and_count(row);
        let skipped = &mut self.result.skipped;
        match outcome {
            RowOutcome::Refunded => skipped.refunded += 1,
            RowOutcome::GenderMismatch => skipped.gender_mismatch += 1,
            RowOutcome::Unparsable => skipped.unparsable += 1,
            RowOutcome::Meal | RowOutcome::NonMeal => {}
        }
        outcome
    }

    fn classify_and_count(&mut self, row: &OrderRow) -> RowOutcome {
        if row.is_refunded() {
            return RowOutcome::Refunded;
        }
        if let Some(gender) = self.result.scope.gender_filter()
            && !row.gender_tag.contains(gender)
        {
            return RowOutcome::GenderMismatch;
        }
        let Some(item) = parse_line_item(&row.line_item_raw) else {
            return RowOutcome::Unparsable;
        };
        if item.item_name.is_empty() {
            return RowOutcome::Unparsable;
        }

        let result = &mut self.result;
        if item.is_meal {
            result.total_meals += 1;
        } else {
            result.total_non_meals += 1;
        }
        if let Some(breakdown) = result.breakdown.as_mut() {
            let by_item = if item.is_meal {
                &mut breakdown.meal_by_item
            } else {
                &mut breakdown.non_meal_by_item
            };
            *by_item.entry(item.item_name.clone()).or_insert(0) += 1;
        }

        if let Some(drink) = item.countable_drink() {
            *result.drink_counts.entry(drink.to_string()).or_insert(0) += 1;
        }
        let key = ItemSpiceKey::new(item.item_name, item.spice_level);
        *result.item_spice_counts.entry(key).or_insert(0) += 1;

        if item.is_meal {
            RowOutcome::Meal
        } else {
            RowOutcome::NonMeal
        }
    }

    pub fn finish(self) -> AggregationResult {
        self.result
    }
}

/// Aggregates every row in `scope`.
pub fn aggregate_scope(rows: &[OrderRow], scope: Scope) -> AggregationResult {
    let mut aggregator = Aggregator::new(scope);
    for (index, row) in rows.iter().enumerate() {
        let outcome = aggregator.push(row);
        if !outcome.is_counted() {
            debug!(scope = %aggregator.scope(), row = index, ?outcome, "row skipped");
        }
    }
    let result = aggregator.finish();
    info!(
        scope = %result.scope,
        rows = rows.len(),
        meals = result.total_meals,
        non_meals = result.total_non_meals,
        skipped = result.skipped.total(),
        "aggregation complete"
    );
    result
}

/// Aggregates `rows`, restricted to one gender when `gender_filter` is set.
///
/// The filter is a case-sensitive substring test on the gender tag, so a
/// household tag such as `"Brother, Sister"` is counted in both gender
/// scopes and once in the combined scope.
pub fn aggregate(rows: &[OrderRow], gender_filter: Option<&str>) -> AggregationResult {
    let scope = match gender_filter {
        Some(gender) => Scope::Gender(gender.to_string()),
        None => Scope::Combined,
    };
    aggregate_scope(rows, scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str, status: &str, gender: &str) -> OrderRow {
        OrderRow::new(line, status, gender)
    }

    #[test]
    fn push_reports_outcome() {
        let mut aggregator = Aggregator::new(Scope::Gender("Sister".to_string()));
        assert_eq!(
            aggregator.push(&row("MEAL: Wrap/Mild/Water", "", "Sister")),
            RowOutcome::Meal
        );
        assert_eq!(
            aggregator.push(&row("Wrap/Mild/Water", "", "Sister")),
            RowOutcome::NonMeal
        );
        assert_eq!(
            aggregator.push(&row("Wrap/Mild/Water", "REFUNDED", "Sister")),
            RowOutcome::Refunded
        );
        assert_eq!(
            aggregator.push(&row("Wrap/Mild/Water", "", "Brother")),
            RowOutcome::GenderMismatch
        );
        assert_eq!(
            aggregator.push(&row("Wrap", "", "Sister")),
            RowOutcome::Unparsable
        );
        let result = aggregator.finish();
        assert_eq!(result.skipped.refunded, 1);
        assert_eq!(result.skipped.gender_mismatch, 1);
        assert_eq!(result.skipped.unparsable, 1);
        assert_eq!(result.total_meals, 1);
        assert_eq!(result.total_non_meals, 1);
        assert!(result.breakdown.is_none());
    }

    #[test]
    fn gender_filter_is_case_sensitive() {
        let rows = vec![row("Wrap/Mild/Water", "", "sister")];
        let result = aggregate(&rows, Some("Sister"));
        assert!(result.item_spice_counts.is_empty());
        assert_eq!(result.skipped.gender_mismatch, 1);
    }

    #[test]
    fn refund_check_runs_before_gender_check() {
        let rows = vec![row("Wrap/Mild/Water", "Refunded", "Brother")];
        let result = aggregate(&rows, Some("Sister"));
        assert_eq!(result.skipped.refunded, 1);
        assert_eq!(result.skipped.gender_mismatch, 0);
    }

    #[test]
    fn empty_item_after_marker_is_skipped() {
        let rows = vec![row("MEAL: /Hot/Cola", "", "Brother")];
        let result = aggregate(&rows, None);
        assert_eq!(result.total_meals, 0);
        assert!(result.drink_counts.is_empty());
        assert_eq!(result.skipped.unparsable, 1);
    }
}
