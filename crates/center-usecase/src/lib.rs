//! # Learning Center Use Case Layer
//!
//! Application services. Each one validates preconditions, drives an
//! aggregate and persists it through a repository port.
//!
//! - `profiles` - command/query services and the `ProfilesContextFacade`
//! - `students` - command/query services and the `ExternalProfileService`
//!   port, the only way Students learn anything about Profiles
//!
//! Collaborators are handed in through constructors; nothing here looks
//! anything up globally.

pub use center_domain;

pub mod profiles;
pub mod students;

#[cfg(test)]
pub(crate) mod testing;
