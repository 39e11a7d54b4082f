//! Profile Repository - Abstract persistence for Profiles

use super::RepositoryError;
use crate::model::profile::{Document, EmailAddress, PersonName, Profile};

/// Profile Repository Trait
///
/// `save` inserts when the profile has no id yet and updates otherwise,
/// returning the stored copy with id and audit stamps filled in.
///
/// Note: No async here - that's an implementation detail.
pub trait ProfileRepository: Send + Sync {
    fn save(&self, profile: &Profile) -> Result<Profile, RepositoryError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepositoryError>;

    /// All profiles, ordered by id
    fn find_all(&self) -> Result<Vec<Profile>, RepositoryError>;

    /// Lowest-id profile with exactly this name
    fn find_by_name(&self, name: &PersonName) -> Result<Option<Profile>, RepositoryError>;

    fn find_by_age(&self, age: i32) -> Result<Vec<Profile>, RepositoryError>;

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, RepositoryError>;

    fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, RepositoryError> {
        Ok(self.find_by_email(email)?.is_some())
    }

    fn exists_by_document(&self, document: &Document) -> Result<bool, RepositoryError>;

    fn exists_by_email_and_id_is_not(
        &self,
        email: &EmailAddress,
        id: i64,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .find_by_email(email)?
            .is_some_and(|p| p.id() != Some(id)))
    }

    fn exists_by_document_and_id_is_not(
        &self,
        document: &Document,
        id: i64,
    ) -> Result<bool, RepositoryError>;

    /// Remove by id; removing a missing id is not an error
    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
