//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from center-domain on top of one
//! shared [`Database`].

pub mod in_memory;
pub mod records;
pub mod store;

pub use in_memory::{InMemoryProfileRepository, InMemoryStudentRepository};
pub use store::Database;
