//! Error types for order export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an order export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected a record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Layout Errors ===
    /// A header named in the column layout is not present.
    #[error("column '{column}' not found in header row")]
    ColumnNotFound { column: String },

    /// A column reference contains no A1 letters.
    #[error("invalid column letters '{letters}'")]
    InvalidColumnLetters { letters: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/orders.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/orders.csv");

        let err = IngestError::ColumnNotFound {
            column: "Gender".to_string(),
        };
        assert_eq!(err.to_string(), "column 'Gender' not found in header row");
    }
}
