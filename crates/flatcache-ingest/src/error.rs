//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a CSV file into a cache.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The CSV resource could not be opened.
    #[error("could not open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// End of input was reached before a header row was read.
    #[error("unexpected end of file while reading CSV file header from {path}")]
    UnexpectedEof { path: PathBuf },

    /// A header or data row failed to parse.
    #[error("could not parse CSV file {path}{}: {source}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// The cache already holds an imported dataset.
    #[error("cache is already populated; refusing to import {path}")]
    AlreadyPopulated { path: PathBuf },
}

impl IngestError {
    /// Wraps a CSV lexer error, picking the line number out of its position.
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let line = source.position().map(csv::Position::line);
        Self::CsvParse {
            path: path.into(),
            line,
            source,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
