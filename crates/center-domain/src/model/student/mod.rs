//! Students context model

pub mod academic_period;
pub mod aggregate;
pub mod identifiers;

pub use academic_period::AcademicPeriod;
pub use aggregate::Student;
pub use identifiers::{CurriculumId, ProfileId, ProgramId, StudentCode};
