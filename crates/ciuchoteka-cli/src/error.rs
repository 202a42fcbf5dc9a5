//! Error handling for the Ciuchoteka CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use ciuchoteka_core::{application::ApplicationError, domain::DomainError, error::CiuchotekaError};

// Re-export so callers only need `use crate::error::*`.
pub use ciuchoteka_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `ciuchoteka-core` or its adapters.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] CiuchotekaError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A backup could not be written to disk.
    #[error("Failed to write backup to {path}")]
    BackupWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be produced.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the config file location with 'ciuchoteka config path'".into(),
                "Use 'ciuchoteka init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],

            Self::BackupWrite { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "Choose another directory with --output".into(),
            ],

            Self::Json(_) => vec![],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Storage => ErrorCategory::Storage,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::BackupWrite { .. } | Self::Json(_) => {
                ErrorCategory::Internal
            }
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Storage       |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Storage => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the report printed on stderr: message, optional cause chain,
    /// suggestions, then a hint about `-v` when not already verbose.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("caused by: {err}"), |t| t.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Storage => tracing::error!("Storage error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
        if matches!(self, Self::Core(core) if core.is_unsaved_change()) {
            tracing::warn!("Change kept in memory only; it was not written to storage");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// The storage medium failed; a change may not be durable.
    Storage,
    /// Internal/system error.
    Internal,
}

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Implemented for `Result<T, std::io::Error>`, producing `CliError::IoError`.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn core(err: impl Into<CiuchotekaError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        assert_eq!(core(DomainError::InvalidCost { cost: -1.0 }).exit_code(), 2);
        assert_eq!(
            core(ApplicationError::ImportFormat {
                reason: "x".into()
            })
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::RecordNotFound {
            kind: "outfit",
            id: "x".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_storage_write() {
        let err = core(ApplicationError::StorageWrite {
            key: "ciuchoteka_data".into(),
            reason: "quota exceeded".into(),
        });
        assert_eq!(err.exit_code(), 5);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("may not be durably saved"))
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn plain_render_has_message_and_suggestions() {
        let err = core(ApplicationError::RecordNotFound {
            kind: "clothing item",
            id: "abc".into(),
        });
        let s = err.render(false, false);
        assert!(s.contains("No clothing item with id 'abc'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("ciuchoteka item list"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_causes_without_hint() {
        let err = CliError::BackupWrite {
            path: PathBuf::from("/ro/backup.json"),
            source: io::Error::other("read-only file system"),
        };
        let s = err.render(true, false);
        assert!(s.contains("caused by: read-only file system"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(CliError::Cancelled.render(false, true).contains('\u{1b}'));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading photo");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
