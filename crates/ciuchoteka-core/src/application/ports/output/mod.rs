//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ciuchoteka-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::PhotoProfile;
use crate::error::CiuchotekaResult;

/// Port for the persistent key-value medium.
///
/// Implemented by:
/// - `ciuchoteka_adapters::storage::FileMedium` (production)
/// - `ciuchoteka_adapters::storage::MemoryMedium` (testing)
///
/// ## Design Notes
///
/// - Values are whole UTF-8 strings; there is no partial write
/// - `set` may refuse a value (quota); that surfaces as `StorageWrite`
#[cfg_attr(test, mockall::automock)]
pub trait StorageMedium: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> CiuchotekaResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> CiuchotekaResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> CiuchotekaResult<()>;

    /// Sum of key length plus value length over every stored entry.
    fn used_bytes(&self) -> CiuchotekaResult<u64>;
}

/// Port for the image compression collaborator.
///
/// Implemented by:
/// - `ciuchoteka_adapters::photo::JpegCompressor`
///
/// The core never looks inside the returned string; it is stored verbatim
/// as a record's `photo`. No cancellation, no retry.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCompressor: Send + Sync {
    /// Read and encode the image at `source` for the given record kind.
    fn compress(&self, source: &Path, profile: PhotoProfile) -> CiuchotekaResult<String>;
}
