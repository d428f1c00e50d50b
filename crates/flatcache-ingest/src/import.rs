//! Single-pass CSV import with streaming type inference.

use std::path::Path;

use crate::cache::DataSetCache;
use crate::error::{IngestError, Result};
use crate::infer::observe_row;
use crate::observer::{ImportObserver, TracingObserver};
use crate::options::ImportOptions;
use crate::records::{check_quotes, open_reader, read_header};
use crate::summary::ImportSummary;

/// Imports a CSV file into `cache` with default options, logging through
/// `tracing`.
///
/// See [`Importer::import`].
pub fn import(cache: &mut DataSetCache, path: impl AsRef<Path>) -> Result<ImportSummary> {
    Importer::new(ImportOptions::default()).import(cache, path)
}

/// Reads a CSV file into a [`DataSetCache`], inferring one type per field.
#[derive(Debug, Default)]
pub struct Importer<O = TracingObserver> {
    options: ImportOptions,
    observer: O,
}

impl Importer {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            observer: TracingObserver,
        }
    }
}

impl<O: ImportObserver> Importer<O> {
    /// Replace the observer that receives import events.
    pub fn with_observer<P: ImportObserver>(self, observer: P) -> Importer<P> {
        Importer {
            options: self.options,
            observer,
        }
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Imports `path` into `cache`.
    ///
    /// The first record becomes the field names; every field starts at the
    /// configured seed type and widens as each data row is observed. Cells are
    /// stored as raw text.
    ///
    /// # Errors
    ///
    /// - [`IngestError::AlreadyPopulated`] if `cache` already holds data. The
    ///   cache is not touched.
    /// - [`IngestError::Open`] if the file cannot be opened. The cache is not
    ///   touched.
    /// - [`IngestError::UnexpectedEof`] if the file has no header row.
    /// - [`IngestError::CsvParse`] if a record is malformed, has an unbalanced
    ///   or stray quote, or its field count differs from the header's. Rows
    ///   read before the bad record stay in the cache.
    pub fn import(
        &mut self,
        cache: &mut DataSetCache,
        path: impl AsRef<Path>,
    ) -> Result<ImportSummary> {
        let path = path.as_ref();
        if !cache.is_empty() {
            return Err(IngestError::AlreadyPopulated {
                path: path.to_path_buf(),
            });
        }

        let _span = tracing::debug_span!("import", path = %path.display()).entered();
        self.observer.import_started(path);

        let mut reader = open_reader(path, &self.options)?;
        let names = read_header(&mut reader, path)?;
        check_quotes(&reader, 0, path)?;
        cache.set_fields(names, self.options.seed.field_type());

        let mut record = csv::StringRecord::new();
        let mut rows_read: u64 = 0;
        loop {
            // Quoting errors take precedence over width errors.
            let read = reader.read_record(&mut record);
            check_quotes(&reader, rows_read + 1, path)?;
            if !read.map_err(|e| IngestError::csv(path, e))? {
                break;
            }

            observe_row(cache.field_types_mut(), record.iter());
            cache.push_row(record.iter().map(str::to_owned).collect());

            rows_read += 1;
            if self
                .options
                .progress_interval
                .is_some_and(|every| rows_read % every == 0)
            {
                self.observer.rows_progress(rows_read);
            }
        }

        self.observer.import_completed(cache.row_count());
        for (name, field_type) in cache.field_names().iter().zip(cache.field_types()) {
            self.observer.field_typed(name, *field_type);
        }

        Ok(cache.summary(path))
    }
}
