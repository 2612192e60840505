//! Summary sheets: rendered lists laid out in columns, with a footer of
//! label/value totals below the longest list.

use std::fmt;

use iftar_model::{AggregationResult, RenderedReport, Scope};
use serde::Serialize;

use crate::compose::TOTAL_MEALS_LABEL;

pub const FOOD_ORDERS_HEADER: &str = "Food Orders";
pub const DRINK_ORDERS_HEADER: &str = "Drink Orders";
pub const MEAL_BREAKDOWN_HEADER: &str = "MEAL Breakdown (by main item)";
pub const NON_MEAL_BREAKDOWN_HEADER: &str = "Non-MEAL Breakdown (by main item)";

pub const TOTAL_NON_MEALS_LABEL: &str = "Total Non-MEAL Orders:";
pub const EXTRA_ORDERS_LABEL: &str = "Extra Orders:";
pub const TOTAL_ORDERS_LABEL: &str = "Total Orders:";

/// Blank rows left between the longest list and the footer block.
const FOOTER_GAP: usize = 2;

/// A list column; `index` is the 0-based sheet column (A = 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryColumn {
    pub index: usize,
    pub header: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FooterValue {
    Count(usize),
    /// Left for a manual entry.
    Blank,
}

impl FooterValue {
    pub fn count(self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(count),
            Self::Blank => None,
        }
    }
}

impl fmt::Display for FooterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Blank => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterEntry {
    pub label: String,
    pub value: FooterValue,
}

impl FooterEntry {
    fn new(label: &str, value: FooterValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySheet {
    pub title: String,
    pub scope: Scope,
    pub columns: Vec<SummaryColumn>,
    pub footer: Vec<FooterEntry>,
}

impl SummarySheet {
    /// 1-based sheet row of the first footer entry.
    pub fn footer_row(&self) -> usize {
        let longest = self
            .columns
            .iter()
            .map(|column| column.lines.len())
            .max()
            .unwrap_or(0);
        // Header row, the lists, then the gap.
        longest + FOOTER_GAP + 2
    }

    pub fn column(&self, header: &str) -> Option<&SummaryColumn> {
        self.columns.iter().find(|column| column.header == header)
    }

    /// Lines of the column with `header`; empty when the column is absent.
    pub fn column_lines(&self, header: &str) -> &[String] {
        self.column(header)
            .map(|column| column.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up a footer value by its exact label.
    pub fn find_footer_value(&self, label: &str) -> Option<FooterValue> {
        let label = label.trim();
        self.footer
            .iter()
            .find(|entry| entry.label.trim() == label)
            .map(|entry| entry.value)
    }

    pub fn footer_count(&self, label: &str) -> Option<usize> {
        self.find_footer_value(label).and_then(FooterValue::count)
    }

    /// Flattens the sheet into rows of cell text, row 1 first.
    ///
    /// Footer labels go in column A and values in column B.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let width = self
            .columns
            .iter()
            .map(|column| column.index + 1)
            .max()
            .unwrap_or(0)
            .max(2);
        let footer_row = self.footer_row();
        let height = if self.footer.is_empty() {
            footer_row - FOOTER_GAP - 1
        } else {
            footer_row + self.footer.len() - 1
        };
        let mut grid = vec![vec![String::new(); width]; height];
        for column in &self.columns {
            grid[0][column.index] = column.header.clone();
            for (offset, line) in column.lines.iter().enumerate() {
                grid[offset + 1][column.index] = line.clone();
            }
        }
        for (offset, entry) in self.footer.iter().enumerate() {
            let row = &mut grid[footer_row - 1 + offset];
            row[0] = entry.label.clone();
            row[1] = entry.value.to_string();
        }
        grid
    }
}

/// The combined summary: four list columns and a four-line footer.
///
/// `Total Orders:` is meals + non-meals + extra, with a blank extra
/// counted as zero.
pub fn combined_summary(
    title: &str,
    result: &AggregationResult,
    report: &RenderedReport,
    extra_orders: Option<usize>,
) -> SummarySheet {
    let total = result.total_meals + result.total_non_meals + extra_orders.unwrap_or(0);
    SummarySheet {
        title: title.to_string(),
        scope: result.scope.clone(),
        columns: vec![
            list_column(0, FOOD_ORDERS_HEADER, &report.food),
            list_column(2, DRINK_ORDERS_HEADER, &report.drinks),
            list_column(4, MEAL_BREAKDOWN_HEADER, &report.meal_breakdown),
            list_column(5, NON_MEAL_BREAKDOWN_HEADER, &report.non_meal_breakdown),
        ],
        footer: vec![
            FooterEntry::new(TOTAL_MEALS_LABEL, FooterValue::Count(result.total_meals)),
            FooterEntry::new(
                TOTAL_NON_MEALS_LABEL,
                FooterValue::Count(result.total_non_meals),
            ),
            FooterEntry::new(
                EXTRA_ORDERS_LABEL,
                extra_orders.map_or(FooterValue::Blank, FooterValue::Count),
            ),
            FooterEntry::new(TOTAL_ORDERS_LABEL, FooterValue::Count(total)),
        ],
    }
}

/// A gender summary: food and drink columns and the meal total.
pub fn gender_summary(
    title: &str,
    result: &AggregationResult,
    report: &RenderedReport,
) -> SummarySheet {
    SummarySheet {
        title: title.to_string(),
        scope: result.scope.clone(),
        columns: vec![
            list_column(0, FOOD_ORDERS_HEADER, &report.food),
            list_column(2, DRINK_ORDERS_HEADER, &report.drinks),
        ],
        footer: vec![FooterEntry::new(
            TOTAL_MEALS_LABEL,
            FooterValue::Count(result.total_meals),
        )],
    }
}

fn list_column(index: usize, header: &str, lines: &[String]) -> SummaryColumn {
    SummaryColumn {
        index,
        header: header.to_string(),
        lines: lines.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iftar_model::OrderRow;

    use crate::aggregate::aggregate;
    use crate::render::render;

    fn sample_rows() -> Vec<OrderRow> {
        vec![
            OrderRow::new("MEAL: Burger/Hot/Cola", "", "Brother"),
            OrderRow::new("Burger/Hot/Cola", "", "Sister"),
            OrderRow::new("Wrap/Mild/None (can only buy drink with meal)", "", "Sister"),
        ]
    }

    #[test]
    fn combined_footer_sits_below_longest_list() {
        let result = aggregate(&sample_rows(), None);
        let sheet = combined_summary("Orders Summary", &result, &render(&result), Some(3));
        // Two food lines is the longest list: rows 2-3, gap rows 4-5.
        assert_eq!(sheet.footer_row(), 6);
        assert_eq!(sheet.footer_count(TOTAL_MEALS_LABEL), Some(1));
        assert_eq!(sheet.footer_count(TOTAL_NON_MEALS_LABEL), Some(2));
        assert_eq!(sheet.footer_count(EXTRA_ORDERS_LABEL), Some(3));
        assert_eq!(sheet.footer_count(TOTAL_ORDERS_LABEL), Some(6));
    }

    #[test]
    fn blank_extra_counts_as_zero() {
        let result = aggregate(&sample_rows(), None);
        let sheet = combined_summary("Orders Summary", &result, &render(&result), None);
        assert_eq!(
            sheet.find_footer_value(EXTRA_ORDERS_LABEL),
            Some(FooterValue::Blank)
        );
        assert_eq!(sheet.footer_count(EXTRA_ORDERS_LABEL), None);
        assert_eq!(sheet.footer_count(TOTAL_ORDERS_LABEL), Some(3));
    }

    #[test]
    fn missing_footer_label_is_none() {
        let result = aggregate(&sample_rows(), Some("Sister"));
        let sheet = gender_summary("Sisters' Summary", &result, &render(&result));
        assert_eq!(sheet.find_footer_value(TOTAL_ORDERS_LABEL), None);
        assert_eq!(sheet.footer_count(TOTAL_MEALS_LABEL), Some(0));
        assert_eq!(sheet.column_lines(MEAL_BREAKDOWN_HEADER), &[] as &[String]);
    }

    #[test]
    fn grid_places_lists_and_footer() {
        let result = aggregate(&sample_rows(), Some("Sister"));
        let sheet = gender_summary("Sisters' Summary", &result, &render(&result));
        let grid = sheet.to_grid();
        assert_eq!(grid, vec![
            vec!["Food Orders", "", "Drink Orders"],
            vec!["Burger: Hot x1", "", "Cola x1"],
            vec!["Wrap: Mild x1", "", ""],
            vec!["", "", ""],
            vec!["", "", ""],
            vec!["Total MEAL Orders:", "0", ""],
        ]);
    }

    #[test]
    fn empty_sheet_still_has_headers_and_footer() {
        let result = aggregate(&[], None);
        let sheet = combined_summary("Orders Summary", &result, &render(&result), None);
        assert_eq!(sheet.footer_row(), 4);
        let grid = sheet.to_grid();
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0][0], FOOD_ORDERS_HEADER);
        assert_eq!(grid[0][5], NON_MEAL_BREAKDOWN_HEADER);
        assert_eq!(grid[3][0], TOTAL_MEALS_LABEL);
        assert_eq!(grid[5][1], "");
        assert_eq!(grid[6][1], "0");
    }
}
