//! Order aggregation and report generation.
//!
//! The stages run leaves first: [`parse_line_item`] splits a raw line item,
//! [`aggregate`] counts rows per scope, [`render`] turns counts into sorted
//! label lists and [`compose`] lays those lists out as a message with bold
//! headings. [`pipeline::run`] strings the stages together with the summary
//! and order sheets.
//!
//! ```
//! use iftar_model::OrderRow;
//! use iftar_report::{aggregate, render};
//!
//! let rows = vec![
//!     OrderRow::new("MEAL: Burger/Hot/Cola", "", "Brother"),
//!     OrderRow::new("Burger/Hot/Cola", "", "Sister"),
//! ];
//! let report = render(&aggregate(&rows, None));
//! assert_eq!(report.food, vec!["Burger: Hot x2".to_string()]);
//! ```

pub mod aggregate;
pub mod compose;
pub mod messages;
pub mod options;
pub mod order_sheet;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod summary;

// === Stages ===
pub use aggregate::{Aggregator, RowOutcome, aggregate, aggregate_scope};
pub use compose::{LineRole, MessageLayout, compose};
pub use parser::parse_line_item;
pub use render::render;

// === Sheets and messages ===
pub use messages::{Message, MessagePanel, combined_message, gender_message};
pub use order_sheet::{ORDER_SHEET_HEADERS, OrderSheet, OrderSheetRow, order_sheet};
pub use summary::{FooterEntry, FooterValue, SummaryColumn, SummarySheet};

// === Pipeline ===
pub use options::{GenderConfig, ReportOptions};
pub use pipeline::{ReportBundle, ScopeReport, run};
