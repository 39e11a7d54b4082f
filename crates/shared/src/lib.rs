//! # Learning Center Shared
//!
//! Configuration types used by the service binary and its tests.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
