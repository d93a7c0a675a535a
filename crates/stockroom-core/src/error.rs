//! Error types for stockroom repositories.
//!
//! Repository operations fail for logical reasons only: a record is missing,
//! a natural key is already taken, or the caller handed over malformed input.
//! None of these are transient, so nothing here is ever retried.

use thiserror::Error;

/// The unified error type for repository operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No record matches the requested identifier or natural key.
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness rule would be violated (e.g. a duplicate name).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input rejected by the use-case layer.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Create a not-found error with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    /// Create a conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Error::Conflict(message.into())
    }

    /// Returns the HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound(_) => 404,
            Error::Conflict(_) => 409,
            Error::InvalidInput(_) => 400,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A single field failed validation.
    #[error("{field} -> {reason}")]
    Field { field: String, reason: String },

    /// An invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },
}

impl InvalidInputError {
    /// Create a field validation error.
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        InvalidInputError::Field {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
