//! Student Repository - Abstract persistence for Students

use super::RepositoryError;
use crate::model::student::{ProfileId, Student, StudentCode};

/// Student Repository Trait
///
/// `save` inserts when the student has no id yet and updates otherwise.
/// Implementations must reject a second student for the same profile or the
/// same code with `RepositoryError::UniqueViolation`, even if the caller
/// checked first.
pub trait StudentRepository: Send + Sync {
    fn save(&self, student: &Student) -> Result<Student, RepositoryError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError>;

    /// All students, ordered by id
    fn find_all(&self) -> Result<Vec<Student>, RepositoryError>;

    fn find_by_code(&self, code: &StudentCode) -> Result<Option<Student>, RepositoryError>;

    fn find_by_profile_id(&self, profile_id: ProfileId) -> Result<Option<Student>, RepositoryError>;

    fn exists_by_code(&self, code: &StudentCode) -> Result<bool, RepositoryError> {
        Ok(self.find_by_code(code)?.is_some())
    }

    fn exists_by_profile_id(&self, profile_id: ProfileId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_profile_id(profile_id)?.is_some())
    }

    /// Remove by id; removing a missing id is not an error
    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
