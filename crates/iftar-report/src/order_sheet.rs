//! Per-gender order sheets: one row per order for the serving team.

use iftar_model::{OrderRow, REFUNDED_STATUS};
use serde::Serialize;
use tracing::{info, warn};

use crate::parser::SEGMENT_DELIMITER;

pub const ORDER_SHEET_HEADERS: [&str; 7] = [
    "Item",
    "Spice Level",
    "Drink",
    "Name",
    "Gender",
    "Dietary",
    "Collected?",
];

/// Data rows that fit the printed sheet (rows 3 to 350).
pub const ORDER_SHEET_CAPACITY: usize = 348;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSheetRow {
    /// Item as entered, `MEAL:` marker included.
    pub item: String,
    pub spice: String,
    pub drink: String,
    pub name: String,
    pub gender: String,
    pub dietary: String,
    pub collected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSheet {
    pub title: String,
    pub gender: String,
    pub rows: Vec<OrderSheetRow>,
    /// Listed orders with a non-empty item.
    pub total: usize,
}

impl OrderSheet {
    pub fn heading(&self) -> String {
        self.title.to_uppercase()
    }

    pub fn total_label(&self) -> String {
        format!("TOTAL {} ⸻>", self.heading())
    }

    /// Flattens the sheet into rows of cell text.
    ///
    /// Row 1 holds the heading (A), the total label (C) and the total (E);
    /// row 2 the column headers; orders follow.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 2);
        let mut title_row = vec![String::new(); ORDER_SHEET_HEADERS.len()];
        title_row[0] = self.heading();
        title_row[2] = self.total_label();
        title_row[4] = self.total.to_string();
        grid.push(title_row);
        grid.push(ORDER_SHEET_HEADERS.iter().map(ToString::to_string).collect());
        for row in &self.rows {
            grid.push(vec![
                row.item.clone(),
                row.spice.clone(),
                row.drink.clone(),
                row.name.clone(),
                row.gender.clone(),
                row.dietary.clone(),
                if row.collected { "TRUE" } else { "FALSE" }.to_string(),
            ]);
        }
        grid
    }
}

/// Splits a line item into its non-empty, trimmed segments.
fn split_segments(raw: &str) -> Vec<&str> {
    raw.split(SEGMENT_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Builds the order sheet for one gender.
///
/// Unlike the summaries, the gender match here ignores case. Refunded
/// orders are left out. Rows are sorted by name, case-insensitively, with
/// unnamed orders last; orders with the same name keep their export order.
pub fn order_sheet(rows: &[OrderRow], title: &str, gender: &str) -> OrderSheet {
    let mut sheet_rows: Vec<OrderSheetRow> = rows
        .iter()
        .filter(|row| !row.is_refunded() && contains_ignore_case(&row.gender_tag, gender))
        .map(|row| {
            let segments = split_segments(&row.line_item_raw);
            let segment = |index: usize| segments.get(index).copied().unwrap_or("").to_string();
            OrderSheetRow {
                item: segment(0),
                spice: segment(1),
                drink: segment(2),
                name: row.name.clone(),
                gender: row.gender_tag.clone(),
                dietary: row.dietary.clone(),
                collected: false,
            }
        })
        .collect();
    sheet_rows.sort_by_cached_key(|row| (row.name.is_empty(), row.name.to_lowercase()));

    let total = sheet_rows
        .iter()
        .filter(|row| !row.item.is_empty() && !row.item.eq_ignore_ascii_case(REFUNDED_STATUS))
        .count();
    if sheet_rows.len() > ORDER_SHEET_CAPACITY {
        warn!(
            sheet = title,
            rows = sheet_rows.len(),
            capacity = ORDER_SHEET_CAPACITY,
            "order sheet exceeds printable capacity"
        );
    }
    info!(sheet = title, gender, rows = sheet_rows.len(), total, "order sheet built");
    OrderSheet {
        title: title.to_string(),
        gender: gender.to_string(),
        rows: sheet_rows,
        total,
    }
}
