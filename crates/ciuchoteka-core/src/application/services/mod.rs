//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "record an outfit" or "restore a backup".

pub mod storage_service;
pub mod wardrobe_store;

pub use storage_service::{ASSUMED_CAPACITY_BYTES, BackupFile, STORAGE_KEY, StorageService};
pub use wardrobe_store::WardrobeStore;
