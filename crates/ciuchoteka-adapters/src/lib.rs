//! Infrastructure adapters for Ciuchoteka.
//!
//! This crate implements the ports defined in `ciuchoteka-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod photo;
pub mod storage;

// Re-export commonly used adapters
pub use photo::JpegCompressor;
pub use storage::{FileMedium, MemoryMedium};
