//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ciuchoteka-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `StorageMedium`: Key-value persistence with size introspection
//!   - `ImageCompressor`: Photo encoding
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ImageCompressor, StorageMedium};

#[cfg(test)]
pub use output::{MockImageCompressor, MockStorageMedium};
