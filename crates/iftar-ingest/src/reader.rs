//! Order export reader. Row 1 is the header row; data starts at row 2.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::OrderTable;

/// Trims whitespace and stray byte-order marks from a cell.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Reads an order export into an [`OrderTable`].
///
/// Cells are kept exactly as exported, apart from a byte-order mark on the
/// first header cell, so a rewritten copy differs only where it was edited.
/// Rows keep their position, including rows whose cells are all blank.
/// A file with no rows at all yields an empty table rather than an error.
pub fn read_order_table(path: &Path) -> Result<OrderTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let Some(mut headers) = records.next() else {
        debug!(path = %path.display(), "order export is empty");
        return Ok(OrderTable::default());
    };
    if let Some(first) = headers.first_mut()
        && first.starts_with('\u{feff}')
    {
        first.remove(0);
    }
    let rows: Vec<Vec<String>> = records.collect();
    let table = OrderTable { headers, rows };
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "read order export"
    );
    Ok(table)
}
