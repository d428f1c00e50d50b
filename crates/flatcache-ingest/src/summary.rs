//! Serializable description of an imported dataset.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// One field and its final inferred type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    pub field_type: FieldType,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// The imported CSV file.
    pub source: PathBuf,
    /// Number of data rows, excluding the header.
    pub row_count: usize,
    /// Fields in header order.
    pub fields: Vec<FieldSummary>,
}

impl ImportSummary {
    /// Returns the number of fields whose type is `field_type`.
    pub fn count_of(&self, field_type: FieldType) -> usize {
        self.fields
            .iter()
            .filter(|f| f.field_type == field_type)
            .count()
    }
}
