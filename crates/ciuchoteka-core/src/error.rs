//! Unified error handling for Ciuchoteka Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Ciuchoteka Core operations.
#[derive(Debug, Error, Clone)]
pub enum CiuchotekaError {
    /// Errors from the domain layer (form-level validation).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage, import, images).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CiuchotekaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Ciuchoteka".into(),
                "Please report this issue at: https://github.com/ciuchoteka/ciuchoteka/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the failure happened after the in-memory state was already
    /// changed, so the change exists but may not survive a restart.
    pub fn is_unsaved_change(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StorageWrite { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Storage,
    Internal,
}

/// Convenient result type alias.
pub type CiuchotekaResult<T> = Result<T, CiuchotekaError>;
