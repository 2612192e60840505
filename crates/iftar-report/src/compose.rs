//! Announcement text with bold headings.
//!
//! Lines are collected with their role, joined with `\n`, and bold spans
//! are derived afterwards: the first line by position, each heading by the
//! first occurrence of its text anywhere in the message. A data line that
//! literally contains a heading's text ahead of the heading takes the bold
//! instead; this mirrors how the announcements have always been styled.

use iftar_model::{RenderedReport, ReportTotals, StyledText, TextSpan};

pub const FOOD_ORDERS_HEADING: &str = "Food Orders";
pub const MEAL_BREAKDOWN_HEADING: &str = "Meals Breakdown By Item";
pub const DRINKS_ORDERS_HEADING: &str = "Drinks Orders";
pub const TOTAL_MEALS_LABEL: &str = "Total MEAL Orders:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Heading,
    Body,
    Total,
    Blank,
}

/// Message lines tagged with their role, in output order.
#[derive(Debug, Clone, Default)]
pub struct MessageLayout {
    lines: Vec<(LineRole, String)>,
}

impl MessageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: LineRole, text: impl Into<String>) -> &mut Self {
        self.lines.push((role, text.into()));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(LineRole::Blank, "")
    }

    /// A heading followed by its body lines.
    pub fn section(&mut self, heading: &str, body: &[String]) -> &mut Self {
        self.push(LineRole::Heading, heading);
        for line in body {
            self.push(LineRole::Body, line.as_str());
        }
        self
    }

    pub fn roles(&self) -> impl Iterator<Item = LineRole> + '_ {
        self.lines.iter().map(|(role, _)| *role)
    }

    /// Joins the lines and computes bold spans for the title and headings.
    pub fn into_styled(self) -> StyledText {
        let plain_text = self
            .lines
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let mut spans = Vec::new();
        if let Some(first_line) = plain_text.split('\n').next() {
            spans.push(TextSpan::new(0, first_line.len()));
        }
        for (role, text) in &self.lines {
            if *role != LineRole::Heading || text.is_empty() {
                continue;
            }
            if let Some(start) = plain_text.find(text.as_str()) {
                spans.push(TextSpan::new(start, start + text.len()));
            }
        }

        StyledText {
            plain_text,
            bold_spans: coalesce_spans(spans),
        }
    }
}

/// Sorts spans and merges any that overlap or touch; drops empty spans.
pub fn coalesce_spans(mut spans: Vec<TextSpan>) -> Vec<TextSpan> {
    spans.retain(|span| !span.is_empty());
    spans.sort();
    let mut merged: Vec<TextSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// `"Total MEAL Orders: <n>"`, with an empty value when the total is unknown.
pub fn total_meals_line(meals: Option<usize>) -> String {
    let value = meals.map(|count| count.to_string()).unwrap_or_default();
    format!("{TOTAL_MEALS_LABEL} {value}")
}

/// Builds an announcement message from a rendered report.
///
/// Layout: title, blank, food section, blank, meal total, optional meal
/// breakdown section, blank, drinks section.
pub fn compose(
    report: &RenderedReport,
    totals: ReportTotals,
    title: &str,
    include_meal_breakdown: bool,
) -> StyledText {
    let mut layout = MessageLayout::new();
    layout
        .push(LineRole::Title, title)
        .blank()
        .section(FOOD_ORDERS_HEADING, &report.food)
        .blank()
        .push(LineRole::Total, total_meals_line(totals.meals));
    if include_meal_breakdown {
        layout.section(MEAL_BREAKDOWN_HEADING, &report.meal_breakdown);
    }
    layout
        .blank()
        .section(DRINKS_ORDERS_HEADING, &report.drinks);
    layout.into_styled()
}
