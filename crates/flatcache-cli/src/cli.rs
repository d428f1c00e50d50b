//! CLI argument definitions for the flatcache importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use flatcache_ingest::SeedType;

#[derive(Parser)]
#[command(
    name = "flatcache",
    version,
    about = "Load a CSV file into memory and infer a type for every column",
    long_about = "Load a CSV file into an in-memory columnar cache.\n\n\
                  Each column is typed as the narrowest of integer, float, or string\n\
                  that every value in it parses as."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file and report the inferred field types.
    Import(ImportArgs),

    /// Classify literal values the way the importer does.
    Probe(ProbeArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import. The first row holds the field names.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Type every field starts as before the first data row.
    ///
    /// With `unknown`, a file with no data rows reports FIELD_TYPE_UNKNOWN
    /// for every field instead of FIELD_TYPE_INTEGER.
    #[arg(long = "seed", value_enum, default_value = "integer")]
    pub seed: SeedArg,

    /// Show a row counter while importing.
    #[arg(long = "progress")]
    pub progress: bool,

    /// Rows between progress updates.
    #[arg(long = "progress-interval", value_name = "ROWS", default_value_t = 10_000)]
    pub progress_interval: u64,

    /// Print the summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ProbeArgs {
    /// Literal values to classify.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

/// CLI seed choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SeedArg {
    Integer,
    Unknown,
}

impl From<SeedArg> for SeedType {
    fn from(arg: SeedArg) -> Self {
        match arg {
            SeedArg::Integer => SeedType::Integer,
            SeedArg::Unknown => SeedType::Unknown,
        }
    }
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

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let bytes = value.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() {
                Ok(bytes[0])
            } else {
                Err(format!("delimiter must be a single ASCII character, got '{value}'"))
            }
        }
    }
}
