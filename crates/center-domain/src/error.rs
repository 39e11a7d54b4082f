//! Error taxonomy shared by every bounded context.
//!
//! Errors are raised where they are detected and travel unchanged up to the
//! boundary layer, which decides how to present them.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Domain-level failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input or value object
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Missing aggregate
    #[error("{0}")]
    NotFound(String),

    /// Storage failure
    #[error("{0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Translate a repository failure, prefixing storage errors with `context`.
    ///
    /// A unique-index violation is a conflict no matter which write hit it.
    pub fn from_repository(context: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation { .. } => Self::Conflict(err.to_string()),
            RepositoryError::Storage { message } => {
                Self::Persistence(format!("{}: {}", context, message))
            }
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation { .. } => Self::Conflict(err.to_string()),
            RepositoryError::Storage { message } => Self::Persistence(message),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
