//! CSV ingestion into an in-memory columnar cache.
//!
//! A CSV file is read in one pass: the header row names the fields, and each
//! data row widens every field's type along `Integer -> Float -> String`
//! until the narrowest type consistent with every value is known. Cells are
//! kept as their original text.
//!
//! # Example
//!
//! ```no_run
//! use flatcache_ingest::{DataSetCache, FieldType, import};
//!
//! let mut cache = DataSetCache::new();
//! let summary = import(&mut cache, "data/sales.csv")?;
//!
//! println!("{} rows", summary.row_count);
//! assert_eq!(cache.field_type("Order ID"), Some(FieldType::Integer));
//! # Ok::<(), flatcache_ingest::IngestError>(())
//! ```

mod cache;
mod error;
mod field;
mod import;
mod infer;
mod observer;
mod options;
mod records;
mod summary;

// === Error Types ===
pub use error::{IngestError, Result};

// === Data Model ===
pub use cache::{DEFAULT_ROW_CAPACITY, DataSetCache};
pub use field::FieldType;
pub use summary::{FieldSummary, ImportSummary};

// === Import ===
pub use import::{Importer, import};
pub use options::{ImportOptions, SeedType};

// === Type Inference ===
pub use infer::{probe, widen};

// === Observers ===
pub use observer::{ImportObserver, NoopObserver, TracingObserver};
