//! Data model for iftar order reporting.
//!
//! Order rows come in, aggregation results and rendered text go out. Every
//! type here is a plain value: nothing is cached between runs.

pub mod aggregation;
pub mod error;
pub mod key;
pub mod order;
pub mod report;
pub mod styled;

pub use aggregation::{AggregationResult, MealBreakdown, Scope, SkipCounts};
pub use error::{ModelError, Result};
pub use key::{ItemSpiceKey, KEY_DELIMITER};
pub use order::{LineItem, NO_DRINK_SENTINEL, OrderRow, REFUNDED_STATUS};
pub use report::{RenderedReport, ReportTotals};
pub use styled::{StyledText, TextRun, TextSpan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_combined_result_has_breakdown() {
        let result = AggregationResult::empty(Scope::Combined);
        assert!(result.breakdown.is_some());
        assert!(result.is_empty());
        assert_eq!(result.counted_rows(), 0);
    }

    #[test]
    fn empty_gender_result_has_no_breakdown() {
        let scope = Scope::gender("Sister").expect("gender scope");
        let result = AggregationResult::empty(scope);
        assert!(result.breakdown.is_none());
        assert_eq!(result.scope.gender_filter(), Some("Sister"));
    }
}
