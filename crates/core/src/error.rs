use crate::types::DbId;

/// Broad classification used by transports to pick a rejection shape.
///
/// `Parameter` errors are raised before any storage access and are fixed by
/// resubmitting corrected input. `Application` errors come from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parameter,
    Application,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{field} {reason}")]
    InvalidParam { field: &'static str, reason: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidParam`] naming `field`.
    pub fn param(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidParam {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for the "`field` cannot be empty" rejection.
    pub fn missing(field: &'static str) -> Self {
        Self::param(field, "cannot be empty")
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidParam { .. } => ErrorKind::Parameter,
            CoreError::NotFound { .. } | CoreError::Conflict(_) | CoreError::Storage(_) => {
                ErrorKind::Application
            }
        }
    }
}
