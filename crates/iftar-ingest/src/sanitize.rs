//! Blanking of personal-data columns in the order export.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::layout::column_letters;
use crate::table::OrderTable;

static SENSITIVE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(billing|shipping|address|addr|postcode|post code|zip|eircode|city|county|state|country|phone|mobile|email|e-mail|customer|contact|first name|last name|surname|company|order notes|note)",
    )
    .unwrap_or_else(|error| panic!("sensitive header pattern is invalid: {error}"))
});

/// Returns true when a header names a personal-data column.
pub fn is_sensitive_header(header: &str) -> bool {
    SENSITIVE_HEADER.is_match(header)
}

/// A column whose data cells were cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearedColumn {
    pub index: usize,
    pub letters: String,
    pub header: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    pub cleared: Vec<ClearedColumn>,
    pub rows: usize,
}

impl SanitizeReport {
    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty()
    }
}

/// Clears data cells of every column whose header looks sensitive.
///
/// The header row is kept, blank headers are skipped, and columns in
/// `protected` are never touched. A table without data rows is returned
/// unchanged.
pub fn sanitize_table(table: &mut OrderTable, protected: &BTreeSet<usize>) -> SanitizeReport {
    if table.rows.is_empty() || table.headers.is_empty() {
        return SanitizeReport::default();
    }
    let mut cleared = Vec::new();
    for (index, header) in table.headers.iter().enumerate() {
        if protected.contains(&index) {
            continue;
        }
        let header = header.trim();
        if header.is_empty() || !is_sensitive_header(header) {
            continue;
        }
        debug!(column = %column_letters(index), header, "clearing sensitive column");
        cleared.push(ClearedColumn {
            index,
            letters: column_letters(index),
            header: header.to_string(),
        });
    }
    for row in &mut table.rows {
        for column in &cleared {
            if let Some(cell) = row.get_mut(column.index) {
                cell.clear();
            }
        }
    }
    info!(
        columns = cleared.len(),
        rows = table.rows.len(),
        "sanitised order export"
    );
    SanitizeReport {
        cleared,
        rows: table.rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_headers() {
        for header in [
            "Billing First Name",
            "Shipping Address 1",
            "Phone",
            "E-mail",
            "Customer Note",
            "Post Code",
            "Eircode",
        ] {
            assert!(is_sensitive_header(header), "{header} should be sensitive");
        }
        for header in ["Status", "Line Item Variant", "Gender", "Dietary", "Quantity"] {
            assert!(!is_sensitive_header(header), "{header} should be kept");
        }
    }
}
