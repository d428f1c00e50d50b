//! Opening CSV sources.

use std::fs::File;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::options::ImportOptions;
use crate::records::QuoteGuard;

/// Opens `path` and wraps it in a CSV reader configured from `options`.
///
/// Headers are not consumed by the reader; the caller reads the first record
/// itself so that an empty file can be told apart from a malformed one.
/// Records must all have the header's field count, and the file is read
/// through a [`QuoteGuard`] so that quoting errors can be reported.
pub(crate) fn open_reader(
    path: &Path,
    options: &ImportOptions,
) -> Result<csv::Reader<QuoteGuard<File>>> {
    let file = File::open(path).map_err(|e| IngestError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .delimiter(options.delimiter)
        .from_reader(QuoteGuard::new(file, options.delimiter)))
}
