//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from storage, not how it is
//! done. Every derived query the services rely on is spelled out as its own
//! method.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait ProfileRepository │  InMemoryProfileRepository
//!   fn save()             │    (tables + unique indexes,
//!   fn find_by_email()    │     optional JSON snapshot)
//! ```

pub mod profile_repository;
pub mod student_repository;

pub use profile_repository::ProfileRepository;
pub use student_repository::StudentRepository;

use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A storage-level unique index rejected the write
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The store could not complete the operation
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn unique(constraint: impl Into<String>) -> Self {
        Self::UniqueViolation {
            constraint: constraint.into(),
        }
    }
}
