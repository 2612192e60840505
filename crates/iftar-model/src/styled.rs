use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Half-open byte range `start..end` into a [`StyledText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Converts the byte range into a character range over `text`.
    ///
    /// Returns `None` when the span does not fall on character boundaries.
    pub fn char_range(&self, text: &str) -> Option<(usize, usize)> {
        let prefix = text.get(..self.start)?;
        let body = text.get(self.start..self.end)?;
        let start = prefix.chars().count();
        Some((start, start + body.chars().count()))
    }
}

/// Plain text plus the ranges that should be shown in bold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub plain_text: String,
    /// Sorted, non-overlapping.
    pub bold_spans: Vec<TextSpan>,
}

/// A maximal run of text sharing one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl StyledText {
    /// Builds styled text, checking every span against the text.
    pub fn new(plain_text: impl Into<String>, bold_spans: Vec<TextSpan>) -> Result<Self> {
        let plain_text = plain_text.into();
        for span in &bold_spans {
            if span.start > span.end || plain_text.get(span.start..span.end).is_none() {
                return Err(ModelError::InvalidSpan {
                    start: span.start,
                    end: span.end,
                    len: plain_text.len(),
                });
            }
        }
        Ok(Self {
            plain_text,
            bold_spans,
        })
    }

    /// Plain text with no styling.
    pub fn plain(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
            bold_spans: Vec::new(),
        }
    }

    /// The text covered by each bold span.
    pub fn bold_text(&self) -> Vec<&str> {
        self.bold_spans
            .iter()
            .filter_map(|span| self.plain_text.get(span.start..span.end))
            .collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.plain_text.split('\n')
    }

    /// Splits the text into alternating plain and bold runs.
    pub fn runs(&self) -> Vec<TextRun<'_>> {
        let mut runs = Vec::new();
        let mut cursor = 0usize;
        for span in &self.bold_spans {
            if span.start < cursor || span.is_empty() {
                continue;
            }
            let (Some(before), Some(bold)) = (
                self.plain_text.get(cursor..span.start),
                self.plain_text.get(span.start..span.end),
            ) else {
                continue;
            };
            if !before.is_empty() {
                runs.push(TextRun {
                    text: before,
                    bold: false,
                });
            }
            runs.push(TextRun {
                text: bold,
                bold: true,
            });
            cursor = span.end;
        }
        if let Some(rest) = self.plain_text.get(cursor..)
            && !rest.is_empty()
        {
            runs.push(TextRun {
                text: rest,
                bold: false,
            });
        }
        runs
    }
}
