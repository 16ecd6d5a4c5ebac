//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    ValidationFailed(String),

    #[error("{entity} \"{value}\" not found")]
    LookupNotFound { entity: String, value: String },

    #[error("Invalid classifier output: {0}")]
    InvalidClassifierOutput(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::ValidationFailed(message.into())
    }

    pub fn lookup_not_found(entity: impl Into<String>, value: impl Into<String>) -> Self {
        DomainError::LookupNotFound {
            entity: entity.into(),
            value: value.into(),
        }
    }

    /// Whether this error was raised while interpreting classifier output.
    ///
    /// Such errors are recovered by falling back to another strategy and
    /// never reach the caller.
    pub fn is_classifier_output(&self) -> bool {
        matches!(self, DomainError::InvalidClassifierOutput(_))
    }
}
