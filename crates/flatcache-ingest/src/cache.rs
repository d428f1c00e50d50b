//! In-memory columnar store populated by a single import pass.

use std::path::Path;

use crate::field::FieldType;
use crate::summary::{FieldSummary, ImportSummary};

/// Initial row capacity reserved by [`DataSetCache::new`].
pub const DEFAULT_ROW_CAPACITY: usize = 1000;

/// Field names, their inferred types, and every row of raw cell text.
///
/// Rows are stored row-major; each row holds one cell per field, aligned to
/// [`field_names`](Self::field_names). Cells keep their original textual
/// representation regardless of the inferred field type. The whole dataset
/// lives in memory.
#[derive(Debug, Clone)]
pub struct DataSetCache {
    field_names: Vec<String>,
    field_types: Vec<FieldType>,
    rows: Vec<Vec<String>>,
}

impl DataSetCache {
    /// Creates an empty cache with room for [`DEFAULT_ROW_CAPACITY`] rows.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ROW_CAPACITY)
    }

    /// Creates an empty cache with room for `rows` rows.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            field_names: Vec::new(),
            field_types: Vec::new(),
            rows: Vec::with_capacity(rows),
        }
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn field_types(&self) -> &[FieldType] {
        &self.field_types
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn field_count(&self) -> usize {
        self.field_names.len()
    }

    /// Returns true if nothing has been imported yet.
    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty() && self.rows.is_empty()
    }

    /// Returns the inferred type of the first field called `name`.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        let idx = self.field_names.iter().position(|n| n == name)?;
        self.field_types.get(idx).copied()
    }

    /// Iterates over the raw values of one column, top to bottom.
    ///
    /// Returns `None` if `index` is not a field index.
    pub fn column(&self, index: usize) -> Option<impl Iterator<Item = &str> + '_> {
        if index >= self.field_names.len() {
            return None;
        }
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Builds a summary of the cache contents, labelled with `source`.
    pub fn summary(&self, source: &Path) -> ImportSummary {
        ImportSummary {
            source: source.to_path_buf(),
            row_count: self.rows.len(),
            fields: self
                .field_names
                .iter()
                .zip(&self.field_types)
                .map(|(name, field_type)| FieldSummary {
                    name: name.clone(),
                    field_type: *field_type,
                })
                .collect(),
        }
    }

    /// Installs the header and seeds every field with `seed`.
    pub(crate) fn set_fields(&mut self, names: Vec<String>, seed: FieldType) {
        self.field_types = vec![seed; names.len()];
        self.field_names = names;
    }

    pub(crate) fn field_types_mut(&mut self) -> &mut [FieldType] {
        &mut self.field_types
    }

    pub(crate) fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.field_names.len());
        self.rows.push(row);
    }
}

impl Default for DataSetCache {
    fn default() -> Self {
        Self::new()
    }
}
