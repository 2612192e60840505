//! JSON config file for the CLI.
//!
//! Every field is optional; missing fields take the defaults of the event
//! the reports were built for (columns `C`, `U`, `AT`, `AU`, `AV`; Brother
//! and Sister sheets; Sister message).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use iftar_ingest::ColumnLayout;
use iftar_report::ReportOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub columns: ColumnLayout,
    pub report: ReportOptions,
}

impl CliConfig {
    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Applies command-line overrides on top of the file values.
    #[must_use]
    pub fn with_extra_orders(mut self, extra: Option<usize>) -> Self {
        if extra.is_some() {
            self.report.extra_orders = extra;
        }
        self
    }
}
