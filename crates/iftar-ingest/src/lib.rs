//! Order export ingestion.
//!
//! Reads the registration sheet export (CSV, header in row 1), maps its
//! columns to [`iftar_model::OrderRow`]s and blanks personal-data columns.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use iftar_ingest::{ColumnLayout, read_order_table};
//!
//! let table = read_order_table(Path::new("orders.csv"))?;
//! let rows = table.order_rows(&ColumnLayout::default())?;
//! ```

mod error;
mod layout;
mod reader;
mod sanitize;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{normalize_cell, read_order_table};

// === Column Layout ===
pub use layout::{ColumnLayout, ColumnRef, ResolvedLayout, column_index_from_a1, column_letters};

// === Sanitising ===
pub use sanitize::{ClearedColumn, SanitizeReport, is_sensitive_header, sanitize_table};

// === Tables ===
pub use table::OrderTable;
