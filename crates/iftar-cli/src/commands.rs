use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use iftar_ingest::{ColumnLayout, OrderTable, SanitizeReport, read_order_table, sanitize_table};
use iftar_model::OrderRow;
use iftar_report::{ReportBundle, run};
use tracing::{info, info_span, trace};

use crate::cli::{ExportArgs, InputArgs, MessageFormatArg, MessagesArgs, SanitizeArgs};
use crate::config::CliConfig;
use crate::export::{ansi_text, messages_json, plan_outputs, write_outputs};
use crate::logging::redact_value;

/// The export as read, plus the order rows taken from it.
#[derive(Debug, Clone)]
pub struct LoadedOrders {
    pub table: OrderTable,
    pub rows: Vec<OrderRow>,
}

/// Outcome of `iftar-orders export`.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
    /// `None` when sanitising was skipped.
    pub sanitize: Option<SanitizeReport>,
}

pub fn load_orders(path: &Path, layout: &ColumnLayout) -> Result<LoadedOrders> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_order_table(path).with_context(|| format!("read {}", path.display()))?;
    let rows = table
        .order_rows(layout)
        .with_context(|| format!("map order columns of {}", path.display()))?;
    for (index, row) in rows.iter().enumerate() {
        trace!(
            row = index + 2,
            line_item = %row.line_item_raw,
            status = %row.status,
            name = redact_value(&row.name),
            gender = redact_value(&row.gender_tag),
            "order row"
        );
    }
    info!(
        rows = rows.len(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(LoadedOrders { table, rows })
}

fn build_report(args: &InputArgs, config: &CliConfig) -> Result<(LoadedOrders, ReportBundle)> {
    let config = config.clone().with_extra_orders(args.extra);
    let orders = load_orders(&args.input, &config.columns)?;
    let bundle = run(&orders.rows, &config.report).context("build reports")?;
    Ok((orders, bundle))
}

pub fn run_summary(args: &InputArgs, config: &CliConfig) -> Result<ReportBundle> {
    let (_, bundle) = build_report(args, config)?;
    Ok(bundle)
}

/// Both messages, formatted for printing.
pub fn run_messages(args: &MessagesArgs, config: &CliConfig) -> Result<String> {
    let (_, bundle) = build_report(&args.input, config)?;
    let output = match args.format {
        MessageFormatArg::Json => messages_json(&bundle.messages).context("serialize messages")?,
        MessageFormatArg::Plain => bundle
            .messages
            .iter()
            .map(|message| message.text.plain_text.clone())
            .collect::<Vec<_>>()
            .join("\n\n"),
        MessageFormatArg::Ansi => bundle
            .messages
            .iter()
            .map(|message| ansi_text(&message.text))
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    Ok(output)
}

pub fn run_export(args: &ExportArgs, config: &CliConfig) -> Result<ExportResult> {
    let (orders, bundle) = build_report(&args.input, config)?;
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });

    let span = info_span!("export", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (sanitized, sanitize) = if args.no_sanitize {
        (None, None)
    } else {
        let mut table = orders.table;
        let report = sanitize_with_layout(&mut table, &config.columns)?;
        (Some(table), Some(report))
    };

    let planned = plan_outputs(&bundle, sanitized.as_ref(), &output_dir)?;
    if !args.dry_run {
        write_outputs(&planned, &output_dir)?;
    }
    info!(
        files = planned.len(),
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(ExportResult {
        output_dir,
        files: planned.into_iter().map(|file| file.path).collect(),
        dry_run: args.dry_run,
        sanitize,
    })
}

pub fn run_sanitize(args: &SanitizeArgs, config: &CliConfig) -> Result<SanitizeReport> {
    let mut table = read_order_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let report = sanitize_with_layout(&mut table, &config.columns)?;
    crate::export::write_grid(&args.output, &crate::export::table_grid(&table))?;
    Ok(report)
}

/// Sanitises `table`, keeping the layout's columns intact.
pub fn sanitize_with_layout(table: &mut OrderTable, layout: &ColumnLayout) -> Result<SanitizeReport> {
    let protected = if table.is_empty() {
        BTreeSet::new()
    } else {
        layout
            .resolve(&table.headers)
            .context("resolve protected columns")?
            .protected()
    };
    Ok(sanitize_table(table, &protected))
}
