//! # Learning Center Domain Layer
//!
//! Pure business rules for the Students and Profiles bounded contexts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Aggregates & Value Objects                    ││
//! │  │  command/   - Validated intents to mutate                   ││
//! │  │  query/     - Read requests                                 ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Domain services (Clock)                       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No I/O happens in this crate. Storage engines and HTTP frameworks can
//! change without touching anything here.

pub mod command;
pub mod error;
pub mod model;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};

pub use model::{
    audit::AuditStamp,
    profile::{
        Document, DocumentType, EmailAddress, PersonName, Profile, ProfileDetails, StreetAddress,
    },
    student::{AcademicPeriod, CurriculumId, ProfileId, ProgramId, Student, StudentCode},
};

pub use repository::{ProfileRepository, RepositoryError, StudentRepository};

pub use service::clock::{Clock, FixedClock, SystemClock};
