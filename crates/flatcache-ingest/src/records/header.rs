//! Header row extraction.

use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads the first record of `reader` as the list of field names.
///
/// Names are kept as written apart from a leading UTF-8 byte order mark.
pub(crate) fn read_header<R: Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
) -> Result<Vec<String>> {
    let mut record = csv::StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| IngestError::csv(path, e))?;
    if !found {
        return Err(IngestError::UnexpectedEof {
            path: path.to_path_buf(),
        });
    }

    let mut names: Vec<String> = record.iter().map(str::to_owned).collect();
    if let Some(first) = names.first_mut() {
        strip_bom(first);
    }
    Ok(names)
}

fn strip_bom(name: &mut String) {
    if name.starts_with('\u{feff}') {
        name.replace_range(..'\u{feff}'.len_utf8(), "");
    }
}
