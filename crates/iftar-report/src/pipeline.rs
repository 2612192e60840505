//! Full report run over a set of order rows.

use std::time::Instant;

use iftar_model::{AggregationResult, OrderRow, RenderedReport, Result, Scope};
use tracing::{debug, info, info_span, warn};

use crate::aggregate::aggregate_scope;
use crate::messages::{Message, combined_message, gender_message};
use crate::options::ReportOptions;
use crate::order_sheet::{OrderSheet, order_sheet};
use crate::render::render;
use crate::summary::{SummarySheet, combined_summary, gender_summary};

/// Aggregation, rendered lists and summary sheet for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeReport {
    pub aggregation: AggregationResult,
    pub report: RenderedReport,
    pub summary: SummarySheet,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBundle {
    pub order_sheets: Vec<OrderSheet>,
    pub combined: ScopeReport,
    pub genders: Vec<ScopeReport>,
    /// Left panel first.
    pub messages: Vec<Message>,
}

impl ReportBundle {
    pub fn summaries(&self) -> impl Iterator<Item = &SummarySheet> {
        std::iter::once(&self.combined.summary).chain(self.genders.iter().map(|g| &g.summary))
    }

    pub fn summary(&self, title: &str) -> Option<&SummarySheet> {
        self.summaries().find(|sheet| sheet.title == title)
    }
}

/// Builds order sheets, summaries and both messages.
///
/// Fails only when a configured gender label is blank.
pub fn run(rows: &[OrderRow], options: &ReportOptions) -> Result<ReportBundle> {
    let start = Instant::now();

    let order_sheets: Vec<OrderSheet> = info_span!("order_sheets").in_scope(|| {
        options
            .genders
            .iter()
            .map(|gender| order_sheet(rows, &gender.orders_title, &gender.label))
            .collect()
    });

    let combined = info_span!("aggregate", scope = "combined").in_scope(|| {
        let aggregation = aggregate_scope(rows, Scope::Combined);
        let report = render(&aggregation);
        let summary = combined_summary(
            &options.combined_title,
            &aggregation,
            &report,
            options.extra_orders,
        );
        ScopeReport {
            aggregation,
            report,
            summary,
        }
    });

    let mut genders = Vec::with_capacity(options.genders.len());
    for gender in &options.genders {
        let scope = Scope::gender(gender.label.as_str())?;
        let span = info_span!("aggregate", scope = %scope);
        let _guard = span.enter();
        let aggregation = aggregate_scope(rows, scope);
        let report = render(&aggregation);
        let summary = gender_summary(&gender.summary_title, &aggregation, &report);
        genders.push(ScopeReport {
            aggregation,
            report,
            summary,
        });
    }

    let messages = info_span!("messages").in_scope(|| {
        let left = combined_message(
            Some(&combined.summary),
            &options.combined_title,
            &options.combined_message_title,
        );
        let right = match options.gender(&options.message_gender) {
            Some(gender) => {
                let sheet = genders
                    .iter()
                    .map(|report| &report.summary)
                    .find(|sheet| sheet.title == gender.summary_title);
                gender_message(sheet, &gender.summary_title, &gender.message_title)
            }
            None => {
                let name = format!("{}s' Summary", options.message_gender);
                warn!(
                    gender = %options.message_gender,
                    "message gender has no configured summary"
                );
                gender_message(None, &name, &options.message_gender.to_uppercase())
            }
        };
        debug!(
            left_bytes = left.text.plain_text.len(),
            right_bytes = right.text.plain_text.len(),
            "messages composed"
        );
        vec![left, right]
    });

    info!(
        rows = rows.len(),
        order_sheets = order_sheets.len(),
        summaries = genders.len() + 1,
        messages = messages.len(),
        duration_ms = start.elapsed().as_millis(),
        "report run complete"
    );

    Ok(ReportBundle {
        order_sheets,
        combined,
        genders,
        messages,
    })
}
