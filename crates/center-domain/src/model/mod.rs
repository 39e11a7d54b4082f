//! Domain Models - The vocabulary of the learning center
//!
//! Two bounded contexts live here side by side. `student` only knows a
//! profile through its `ProfileId`; nothing in it reaches into `profile`.

pub mod audit;
pub mod profile;
pub mod student;
