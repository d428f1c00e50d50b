//! Import configuration.

use crate::field::FieldType;

/// The type every field holds before the first data row is observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedType {
    /// Fields start as `Integer`. A header-only file yields all-`Integer`
    /// fields.
    #[default]
    Integer,
    /// Fields start as `Unknown`. A header-only file yields all-`Unknown`
    /// fields; with at least one data row the result matches `Integer`.
    Unknown,
}

impl SeedType {
    pub fn field_type(self) -> FieldType {
        match self {
            SeedType::Integer => FieldType::Integer,
            SeedType::Unknown => FieldType::Unknown,
        }
    }
}

/// Options controlling how a CSV file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Initial type of every field.
    pub seed: SeedType,
    /// Report progress to the observer every N data rows.
    pub progress_interval: Option<u64>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            seed: SeedType::default(),
            progress_interval: None,
        }
    }
}

impl ImportOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: SeedType) -> Self {
        self.seed = seed;
        self
    }

    /// Set the progress interval. Zero disables progress events.
    #[must_use]
    pub fn with_progress_interval(mut self, rows: u64) -> Self {
        self.progress_interval = (rows > 0).then_some(rows);
        self
    }
}
