//! Application layer for Ciuchoteka.
//!
//! This layer contains:
//! - **Services**: The wardrobe store and its persistence (WardrobeStore, StorageService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ASSUMED_CAPACITY_BYTES,
    BackupFile, // serialised backup handed back to the caller
    STORAGE_KEY,
    StorageService,
    WardrobeStore,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ImageCompressor, StorageMedium};

pub use error::ApplicationError;
