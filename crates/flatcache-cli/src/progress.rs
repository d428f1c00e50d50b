//! Terminal progress for long imports.

use std::path::Path;
use std::time::Duration;

use flatcache_ingest::{FieldType, ImportObserver, TracingObserver};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Logs like [`TracingObserver`] and drives a row counter spinner on stderr.
pub struct ProgressObserver {
    inner: TracingObserver,
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// An observer whose spinner is never drawn.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {pos} rows read [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        Self {
            inner: TracingObserver,
            bar,
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportObserver for ProgressObserver {
    fn import_started(&mut self, path: &Path) {
        self.bar.suspend(|| self.inner.import_started(path));
        self.bar.enable_steady_tick(Duration::from_millis(120));
    }

    fn rows_progress(&mut self, rows: u64) {
        self.bar.set_position(rows);
        self.bar.suspend(|| self.inner.rows_progress(rows));
    }

    fn import_completed(&mut self, rows: usize) {
        self.bar.set_position(rows as u64);
        self.bar.finish_and_clear();
        self.inner.import_completed(rows);
    }

    fn field_typed(&mut self, name: &str, field_type: FieldType) {
        self.inner.field_typed(name, field_type);
    }
}

impl Drop for ProgressObserver {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
