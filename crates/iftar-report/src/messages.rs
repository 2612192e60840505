//! Announcement messages built from summary sheets.
//!
//! Messages read their lists and the meal total back from the summary
//! sheets, so what is announced always matches what the sheets show.

use iftar_model::{RenderedReport, ReportTotals, StyledText};
use serde::Serialize;

use crate::compose::{TOTAL_MEALS_LABEL, compose};
use crate::summary::{
    DRINK_ORDERS_HEADER, FOOD_ORDERS_HEADER, MEAL_BREAKDOWN_HEADER, NON_MEAL_BREAKDOWN_HEADER,
    SummarySheet, TOTAL_NON_MEALS_LABEL,
};

/// Where a message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePanel {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub panel: MessagePanel,
    /// Title of the summary sheet the message was built from.
    pub source: String,
    pub text: StyledText,
}

fn report_from_sheet(sheet: &SummarySheet) -> RenderedReport {
    RenderedReport {
        food: sheet.column_lines(FOOD_ORDERS_HEADER).to_vec(),
        drinks: sheet.column_lines(DRINK_ORDERS_HEADER).to_vec(),
        meal_breakdown: sheet.column_lines(MEAL_BREAKDOWN_HEADER).to_vec(),
        non_meal_breakdown: sheet.column_lines(NON_MEAL_BREAKDOWN_HEADER).to_vec(),
    }
}

/// Message for a summary sheet, or a "not found" note when the sheet is
/// missing.
pub fn summary_message(
    sheet: Option<&SummarySheet>,
    sheet_name: &str,
    title: &str,
    include_meal_breakdown: bool,
) -> StyledText {
    let Some(sheet) = sheet else {
        return StyledText::plain(format!("{sheet_name} not found."));
    };
    let totals = ReportTotals {
        meals: sheet.footer_count(TOTAL_MEALS_LABEL),
        non_meals: sheet.footer_count(TOTAL_NON_MEALS_LABEL),
    };
    compose(
        &report_from_sheet(sheet),
        totals,
        title,
        include_meal_breakdown,
    )
}

/// Combined message: all orders, with the meal breakdown list.
pub fn combined_message(sheet: Option<&SummarySheet>, sheet_name: &str, title: &str) -> Message {
    Message {
        panel: MessagePanel::Left,
        source: sheet_name.to_string(),
        text: summary_message(sheet, sheet_name, title, true),
    }
}

/// Gender message: food, meal total, and drinks, without the breakdown.
pub fn gender_message(sheet: Option<&SummarySheet>, sheet_name: &str, title: &str) -> Message {
    Message {
        panel: MessagePanel::Right,
        source: sheet_name.to_string(),
        text: summary_message(sheet, sheet_name, title, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sheet_gives_note() {
        let message = gender_message(None, "Sisters' Summary", "SISTERS ORDERS");
        assert_eq!(message.text.plain_text, "Sisters' Summary not found.");
        assert!(message.text.bold_spans.is_empty());
        assert_eq!(message.panel, MessagePanel::Right);
    }

    #[test]
    fn missing_total_renders_empty_value() {
        let sheet = SummarySheet {
            title: "Sisters' Summary".to_string(),
            scope: iftar_model::Scope::Gender("Sister".to_string()),
            columns: Vec::new(),
            footer: Vec::new(),
        };
        let text = summary_message(Some(&sheet), "Sisters' Summary", "SISTERS ORDERS", false);
        assert!(text.lines().any(|line| line == "Total MEAL Orders: "));
    }
}
