//! Photo compression adapters.

mod jpeg;

pub use jpeg::JpegCompressor;
