//! Import progress notifications.
//!
//! The importer never logs directly; it reports to an [`ImportObserver`].
//! [`TracingObserver`] forwards every event to `tracing`.

use std::path::Path;

use crate::field::FieldType;

/// Receives events while a CSV file is imported.
///
/// All methods default to doing nothing.
pub trait ImportObserver {
    /// The import of `path` is about to open the file.
    fn import_started(&mut self, _path: &Path) {}

    /// `rows` data rows have been read so far.
    ///
    /// Only sent when a progress interval is configured.
    fn rows_progress(&mut self, _rows: u64) {}

    /// Every row has been read; the cache holds `rows` rows.
    fn import_completed(&mut self, _rows: usize) {}

    /// Final inferred type of one field, sent in header order after
    /// [`import_completed`](Self::import_completed).
    fn field_typed(&mut self, _name: &str, _field_type: FieldType) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ImportObserver for NoopObserver {}

/// Observer that emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ImportObserver for TracingObserver {
    fn import_started(&mut self, path: &Path) {
        tracing::info!(path = %path.display(), "importing");
    }

    fn rows_progress(&mut self, rows: u64) {
        tracing::debug!(rows, "rows read");
    }

    fn import_completed(&mut self, rows: usize) {
        tracing::info!(rows, "finished processing CSV");
    }

    fn field_typed(&mut self, name: &str, field_type: FieldType) {
        tracing::info!(field = name, field_type = %field_type, "field typed");
    }
}

impl<O: ImportObserver + ?Sized> ImportObserver for &mut O {
    fn import_started(&mut self, path: &Path) {
        (**self).import_started(path);
    }

    fn rows_progress(&mut self, rows: u64) {
        (**self).rows_progress(rows);
    }

    fn import_completed(&mut self, rows: usize) {
        (**self).import_completed(rows);
    }

    fn field_typed(&mut self, name: &str, field_type: FieldType) {
        (**self).field_typed(name, field_type);
    }
}
