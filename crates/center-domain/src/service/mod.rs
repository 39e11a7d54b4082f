//! Domain services
//!
//! Stateless helpers the aggregates lean on but do not own.

pub mod clock;
