//! Audit stamps carried by every aggregate root

use chrono::{DateTime, Utc};

/// When an aggregate was first stored and last modified.
///
/// Assigned by the persistence adapter on save; a freshly built aggregate
/// has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamp {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// Stamp for a first insert
    pub fn created(at: DateTime<Utc>) -> Self {
        Self::new(at, at)
    }

    /// Same creation time, new modification time
    pub fn touched(&self, at: DateTime<Utc>) -> Self {
        Self::new(self.created_at, at)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
