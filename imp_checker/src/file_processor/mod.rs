//! File loading for the checker binary

pub mod processor;

pub use processor::{load_source, FileProcessorError, SourceFile};
