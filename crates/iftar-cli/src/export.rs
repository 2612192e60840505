//! Output files for `iftar-orders export`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iftar_ingest::OrderTable;
use iftar_model::StyledText;
use iftar_report::{Message, ReportBundle};
use serde::Serialize;
use tracing::debug;

pub const MESSAGES_JSON: &str = "messages.json";
pub const MESSAGES_TEXT: &str = "messages.txt";
pub const SANITIZED_EXPORT: &str = "sheet1_sanitized.csv";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// File name stem for a sheet title: lowercase, runs of anything that is
/// not a letter or digit collapsed to `_`.
///
/// `"Brothers' Orders"` becomes `brothers_orders`.
pub fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("sheet");
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContents {
    Grid(Vec<Vec<String>>),
    Text(String),
}

/// One file the export will write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: OutputContents,
}

impl OutputFile {
    fn grid(dir: &Path, name: String, grid: Vec<Vec<String>>) -> Self {
        Self {
            path: dir.join(name),
            contents: OutputContents::Grid(grid),
        }
    }

    fn text(dir: &Path, name: &str, text: String) -> Self {
        Self {
            path: dir.join(name),
            contents: OutputContents::Text(text),
        }
    }

    pub fn write(&self) -> Result<()> {
        match &self.contents {
            OutputContents::Grid(grid) => write_grid(&self.path, grid),
            OutputContents::Text(text) => fs::write(&self.path, text)
                .with_context(|| format!("write {}", self.path.display())),
        }
    }
}

/// Lists every output file for `bundle`, with contents, without touching
/// the file system.
pub fn plan_outputs(
    bundle: &ReportBundle,
    sanitized: Option<&OrderTable>,
    output_dir: &Path,
) -> Result<Vec<OutputFile>> {
    let mut files = Vec::new();
    for sheet in &bundle.order_sheets {
        files.push(OutputFile::grid(
            output_dir,
            format!("{}.csv", slug(&sheet.title)),
            sheet.to_grid(),
        ));
    }
    for summary in bundle.summaries() {
        files.push(OutputFile::grid(
            output_dir,
            format!("{}.csv", slug(&summary.title)),
            summary.to_grid(),
        ));
    }
    files.push(OutputFile::text(
        output_dir,
        MESSAGES_JSON,
        messages_json(&bundle.messages).context("serialize messages")?,
    ));
    files.push(OutputFile::text(
        output_dir,
        MESSAGES_TEXT,
        messages_text(&bundle.messages),
    ));
    if let Some(table) = sanitized {
        files.push(OutputFile::grid(output_dir, SANITIZED_EXPORT.to_string(), table_grid(table)));
    }
    Ok(files)
}

/// Writes every planned file, creating `output_dir` first.
pub fn write_outputs(files: &[OutputFile], output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    for file in files {
        file.write()?;
        debug!(path = %file.path.display(), "output written");
    }
    Ok(())
}

/// Header row followed by the data rows.
pub fn table_grid(table: &OrderTable) -> Vec<Vec<String>> {
    std::iter::once(table.headers.clone())
        .chain(table.rows.iter().cloned())
        .collect()
}

pub fn write_grid(path: &Path, grid: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for row in grid {
        writer
            .write_record(row)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

#[derive(Serialize)]
struct MessagesDocument<'a> {
    messages: &'a [Message],
}

pub fn messages_json(messages: &[Message]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&MessagesDocument { messages })
}

/// Plain texts, separated by a blank line.
pub fn messages_text(messages: &[Message]) -> String {
    let mut text = messages
        .iter()
        .map(|message| message.text.plain_text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    text.push('\n');
    text
}

/// Bold spans wrapped in ANSI bold escapes.
pub fn ansi_text(text: &StyledText) -> String {
    let mut out = String::with_capacity(text.plain_text.len());
    for run in text.runs() {
        if run.bold {
            let _ = write!(out, "{BOLD}{}{RESET}", run.text);
        } else {
            out.push_str(run.text);
        }
    }
    out
}
