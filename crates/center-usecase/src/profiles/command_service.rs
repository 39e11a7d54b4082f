//! ProfileCommandService - create, update and delete profiles
//!
//! Uniqueness is keyed on email and on document: no two profiles may share
//! either. The checks here give friendly messages; the store's unique
//! indexes remain the final word when two writers race.

use std::sync::Arc;

use center_domain::command::profile_commands::{
    CreateProfileCommand, DeleteProfileCommand, UpdateProfileCommand,
};
use center_domain::{DomainError, DomainResult, Profile, ProfileRepository};
use tracing::{error, info, warn};

pub struct ProfileCommandService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileCommandService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Create a profile and return its id
    pub fn create(&self, command: CreateProfileCommand) -> DomainResult<i64> {
        let email = command.details.email();
        let document = command.details.document();

        if self.repository.exists_by_email(email)? {
            warn!(%email, "profile rejected: email already registered");
            return Err(DomainError::conflict(format!(
                "Profile with email {} already exists",
                email
            )));
        }
        if self.repository.exists_by_document(document)? {
            warn!(%document, "profile rejected: document already registered");
            return Err(DomainError::conflict(format!(
                "Profile with document {} already exists",
                document
            )));
        }

        let profile = Profile::new(&command);
        let saved = self.repository.save(&profile).map_err(|e| {
            error!(error = %e, "failed to save profile");
            DomainError::from_repository("Error while saving profile", e)
        })?;

        let id = saved
            .id()
            .ok_or_else(|| DomainError::persistence("Error while saving profile: no id assigned"))?;
        info!(profile_id = id, "profile created");
        Ok(id)
    }

    /// Replace all fields of an existing profile
    pub fn update(&self, command: UpdateProfileCommand) -> DomainResult<Profile> {
        let profile_id = command.profile_id;

        let Some(mut profile) = self.repository.find_by_id(profile_id)? else {
            warn!(profile_id, "profile update rejected: not found");
            return Err(profile_not_found(profile_id));
        };

        let email = command.details.email();
        if self
            .repository
            .exists_by_email_and_id_is_not(email, profile_id)?
        {
            warn!(profile_id, %email, "profile update rejected: email taken");
            return Err(DomainError::conflict(format!(
                "Profile with email {} already exists",
                email
            )));
        }
        let document = command.details.document();
        if self
            .repository
            .exists_by_document_and_id_is_not(document, profile_id)?
        {
            warn!(profile_id, %document, "profile update rejected: document taken");
            return Err(DomainError::conflict(format!(
                "Profile with document {} already exists",
                document
            )));
        }

        profile.update(&command);

        let updated = self.repository.save(&profile).map_err(|e| {
            error!(profile_id, error = %e, "failed to update profile");
            DomainError::from_repository("Error while updating profile", e)
        })?;
        info!(profile_id, "profile updated");
        Ok(updated)
    }

    pub fn delete(&self, command: DeleteProfileCommand) -> DomainResult<()> {
        let profile_id = command.profile_id;

        if !self.repository.exists_by_id(profile_id)? {
            warn!(profile_id, "profile delete rejected: not found");
            return Err(profile_not_found(profile_id));
        }

        self.repository.delete_by_id(profile_id).map_err(|e| {
            error!(profile_id, error = %e, "failed to delete profile");
            DomainError::from_repository("Error while deleting profile", e)
        })?;
        info!(profile_id, "profile deleted");
        Ok(())
    }
}

pub(crate) fn profile_not_found(profile_id: i64) -> DomainError {
    DomainError::not_found(format!("Profile with id {} does not exist.", profile_id))
}
