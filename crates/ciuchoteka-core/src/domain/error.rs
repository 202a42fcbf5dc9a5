// ============================================================================
// domain/error.rs - FORM-LEVEL VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The store never raises these: validation belongs to whoever collects the
/// input (the CLI). They are here so every front end validates the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Cost must be a non-negative number, got {cost}")]
    InvalidCost { cost: f64 },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Outfit references unknown clothing item '{id}'")]
    UnknownItemReference { id: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![format!("Provide a value for '{}'", field)],
            Self::InvalidCost { .. } => vec![
                "Cost is optional; omit it or pass a number >= 0".into(),
                "Example: --cost 49.99".into(),
            ],
            Self::UnknownCategory(_) => vec![
                "Valid categories:".into(),
                "  • outerwear".into(),
                "  • bottom".into(),
                "  • shoes".into(),
                "  • accessories".into(),
                "  • other".into(),
            ],
            Self::UnknownItemReference { id } => vec![
                format!("No clothing item has id '{}'", id),
                "List item ids with: ciuchoteka item list".into(),
            ],
            Self::InvalidTimestamp { .. } => vec![
                "Use RFC 3339, e.g. 2024-05-01T18:30:00Z".into(),
                "Or a plain date, e.g. 2024-05-01".into(),
            ],
        }
    }
}
