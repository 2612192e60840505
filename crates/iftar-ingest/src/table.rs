use iftar_model::OrderRow;

use crate::error::Result;
use crate::layout::ColumnLayout;
use crate::reader::normalize_cell;

/// An order export held in memory: one header row plus data rows.
///
/// Cells hold the exported text unchanged. Rows may be shorter or longer
/// than the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OrderTable {
    /// Widest row, header included.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text, or `""` when the row or column is out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Extracts one [`OrderRow`] per data row using `layout`, with cell text
    /// trimmed.
    ///
    /// A table without data rows yields no order rows, whatever the layout.
    pub fn order_rows(&self, layout: &ColumnLayout) -> Result<Vec<OrderRow>> {
        if self.rows.is_empty() {
            return Ok(Vec::new());
        }
        let columns = layout.resolve(&self.headers)?;
        let rows = (0..self.rows.len())
            .map(|row| {
                let cell = |column: usize| normalize_cell(self.cell(row, column));
                OrderRow::new(
                    cell(columns.line_item),
                    cell(columns.status),
                    cell(columns.gender),
                )
                .with_name(cell(columns.name))
                .with_dietary(cell(columns.dietary))
            })
            .collect();
        Ok(rows)
    }
}
