//! Application layer errors.
//!
//! These errors represent failures at the edges of the core: the storage
//! medium, backup files, and the image collaborator. Validation failures are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while persisting, importing, or encoding.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Persisted data could not be read or parsed.
    ///
    /// `StorageService::load` recovers from this itself; it only escapes from
    /// direct medium access.
    #[error("Failed to read stored data: {reason}")]
    StorageRead { reason: String },

    /// The medium rejected a write (e.g. over quota).
    #[error("Failed to save data under '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    /// An imported backup is unparseable or lacks required fields.
    #[error("Invalid backup file: {reason}")]
    ImportFormat { reason: String },

    /// A backup could not be produced.
    #[error("Failed to export data: {reason}")]
    Export { reason: String },

    /// The image collaborator failed to read or encode a photo.
    #[error("Failed to process image {path}: {reason}")]
    ImageProcessing { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Storage medium lock poisoned")]
    StoreLockError,

    /// A lookup by id found nothing.
    #[error("No {kind} with id '{id}'")]
    RecordNotFound { kind: &'static str, id: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StorageWrite { .. } => vec![
                "The change is applied but may not be durably saved".into(),
                "Storage might be full: check usage with 'ciuchoteka storage'".into(),
                "Export a backup, then remove unused photos or outfits".into(),
            ],
            Self::StorageRead { .. } => vec![
                "Stored data could not be read; starting from an empty wardrobe".into(),
                "Restore a backup with 'ciuchoteka import <file>'".into(),
            ],
            Self::ImportFormat { .. } => vec![
                "Backups must contain 'clothingItems', 'outfits' and 'version'".into(),
                "Your current data was left untouched".into(),
            ],
            Self::Export { .. } => vec![
                "Check that the export directory exists and is writable".into(),
            ],
            Self::ImageProcessing { path, .. } => vec![
                format!("Could not use photo: {}", path.display()),
                "Supported formats: JPEG, PNG, WebP".into(),
                "The record was not saved".into(),
            ],
            Self::StoreLockError => vec![
                "The storage medium is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RecordNotFound { kind, .. } => vec![
                format!("List existing ids with: ciuchoteka {} list", kind_command(kind)),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StorageRead { .. } | Self::StorageWrite { .. } => ErrorCategory::Storage,
            Self::ImportFormat { .. } | Self::ImageProcessing { .. } => ErrorCategory::Validation,
            Self::RecordNotFound { .. } => ErrorCategory::NotFound,
            Self::Export { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

fn kind_command(kind: &str) -> &str {
    match kind {
        "clothing item" => "item",
        other => other,
    }
}
