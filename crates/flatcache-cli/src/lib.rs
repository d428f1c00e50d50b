//! CLI library components for the flatcache importer.

pub mod logging;
pub mod progress;
pub mod summary;
