//! Column addressing for the order export.
//!
//! Columns are referenced either by spreadsheet letters (`"AU"`) or by the
//! header text of row 1.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Converts A1 column letters to a 0-based column index.
///
/// Non-letters are ignored and letters are case-insensitive, so `"au"`,
/// `"AU"` and `"$AU"` all give 46. Returns `None` when no letters remain.
pub fn column_index_from_a1(letters: &str) -> Option<usize> {
    let mut index = 0usize;
    let mut seen = false;
    for ch in letters.chars().filter(char::is_ascii_alphabetic) {
        let value = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(value)?;
        seen = true;
    }
    seen.then(|| index - 1)
}

/// Converts a 0-based column index back to A1 letters.
pub fn column_letters(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A reference to one column of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRef {
    /// Spreadsheet letters, e.g. `"C"` or `"AU"`.
    Letter(String),
    /// Header text, matched case-insensitively after trimming.
    Header(String),
}

impl ColumnRef {
    pub fn letter(letters: impl Into<String>) -> Self {
        Self::Letter(letters.into())
    }

    pub fn header(name: impl Into<String>) -> Self {
        Self::Header(name.into())
    }

    pub fn resolve(&self, headers: &[String]) -> Result<usize> {
        match self {
            Self::Letter(letters) => {
                column_index_from_a1(letters).ok_or_else(|| IngestError::InvalidColumnLetters {
                    letters: letters.clone(),
                })
            }
            Self::Header(name) => {
                let wanted = name.trim();
                headers
                    .iter()
                    .position(|header| header.trim().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| IngestError::ColumnNotFound {
                        column: name.clone(),
                    })
            }
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letters) => write!(f, "column {letters}"),
            Self::Header(name) => write!(f, "column '{name}'"),
        }
    }
}

/// Where each order field lives in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnLayout {
    pub status: ColumnRef,
    pub line_item: ColumnRef,
    pub name: ColumnRef,
    pub gender: ColumnRef,
    pub dietary: ColumnRef,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            status: ColumnRef::letter("C"),
            line_item: ColumnRef::letter("U"),
            name: ColumnRef::letter("AT"),
            gender: ColumnRef::letter("AU"),
            dietary: ColumnRef::letter("AV"),
        }
    }
}

/// A [`ColumnLayout`] resolved to 0-based column indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub status: usize,
    pub line_item: usize,
    pub name: usize,
    pub gender: usize,
    pub dietary: usize,
}

impl ResolvedLayout {
    /// Columns the reports are built from; sanitising must leave them alone.
    pub fn protected(&self) -> BTreeSet<usize> {
        [
            self.status,
            self.line_item,
            self.name,
            self.gender,
            self.dietary,
        ]
        .into_iter()
        .collect()
    }
}

impl ColumnLayout {
    pub fn resolve(&self, headers: &[String]) -> Result<ResolvedLayout> {
        Ok(ResolvedLayout {
            status: self.status.resolve(headers)?,
            line_item: self.line_item.resolve(headers)?,
            name: self.name.resolve(headers)?,
            gender: self.gender.resolve(headers)?,
            dietary: self.dietary.resolve(headers)?,
        })
    }
}
