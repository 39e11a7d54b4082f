//! Queries - side-effect-free read requests

pub mod profile_queries;
pub mod student_queries;
