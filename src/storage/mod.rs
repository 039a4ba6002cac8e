//! Storage layer: reading the restaurant dataset and writing output files.

pub mod atomic;
pub mod csv;
pub mod sink;

// Re-export key types
pub use atomic::write_atomic;
pub use csv::{CsvLoader, DEFAULT_NAME_COLUMN, LoadOptions, clean_cell};
pub use sink::{FaultySink, FsSink, PageSink};
