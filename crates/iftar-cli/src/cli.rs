//! CLI argument definitions for `iftar-orders`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "iftar-orders",
    version,
    about = "Iftar order reports - summaries, order sheets and announcement messages",
    long_about = "Build iftar order reports from a registration sheet CSV export.\n\n\
                  Produces per-gender order sheets, summary sheets with totals,\n\
                  and announcement messages with bold headings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and gender tags to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON config file with column layout and report titles.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the combined and per-gender summaries as tables.
    Summary(InputArgs),

    /// Print both announcement messages.
    Messages(MessagesArgs),

    /// Write order sheets, summaries, messages and the sanitised export.
    Export(ExportArgs),

    /// Write a copy of the export with personal-data columns blanked.
    Sanitize(SanitizeArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Registration sheet export (CSV, header in row 1).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Orders taken outside the form, added to the combined total.
    #[arg(long = "extra", value_name = "N")]
    pub extra: Option<usize>,
}

#[derive(Parser)]
pub struct MessagesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How to print the messages.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: MessageFormatArg,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (default: `output` next to the CSV).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build everything and list the files without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the sanitised copy of the export.
    #[arg(long = "no-sanitize")]
    pub no_sanitize: bool,
}

#[derive(Parser)]
pub struct SanitizeArgs {
    /// Registration sheet export (CSV, header in row 1).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Where to write the sanitised copy.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

/// Message output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageFormatArg {
    /// Plain text, bold spans dropped.
    Plain,
    /// Bold spans as ANSI escape codes.
    Ansi,
    /// JSON with plain text and byte spans.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
