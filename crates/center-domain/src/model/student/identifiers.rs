//! Identifiers used by the Students context
//!
//! `ProfileId`, `ProgramId` and `CurriculumId` point at things this context
//! does not own. They only promise a non-negative number.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Unique, immutable code of a Student
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentCode(String);

impl StudentCode {
    /// A fresh random code
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a code received from outside; it must not be blank.
    pub fn parse(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("Student code cannot be null or blank"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StudentCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a Profile in the Profiles context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::validation(
                "Profile ID cannot be null or negative",
            ));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an academic program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(i64);

impl ProgramId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::validation(
                "ProgramId cannot be null or negative",
            ));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Reference to a curriculum of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurriculumId(i64);

impl CurriculumId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            return Err(DomainError::validation(
                "Curriculum ID cannot be null or negative",
            ));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
