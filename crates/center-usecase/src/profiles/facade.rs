//! ProfilesContextFacade - the Profiles context's public face
//!
//! Other bounded contexts talk to Profiles only through this type. It reuses
//! the context's own command and query services and speaks in plain values,
//! so callers never touch Profiles' internals. Absence is always `None`.

use std::sync::Arc;

use center_domain::command::profile_commands::{
    CreateProfileCommand, DeleteProfileCommand, UpdateProfileCommand,
};
use center_domain::query::profile_queries::{
    ExistsProfileByIdQuery, GetProfileByIdQuery, GetProfileByNameQuery,
};
use center_domain::{
    Clock, Document, DocumentType, DomainResult, EmailAddress, PersonName, Profile,
    ProfileDetails, StreetAddress,
};
use chrono::NaiveDate;

use super::{ProfileCommandService, ProfileQueryService};

/// Raw profile fields as they arrive from outside the context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileValues {
    pub first_name: String,
    pub last_name: String,
    /// Wire code of the document type (see `DocumentType::code`)
    pub document_type: i32,
    pub document_number: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ProfileValues {
    /// Validate every field and derive the age as of `today`
    pub fn into_details(self, today: NaiveDate) -> DomainResult<ProfileDetails> {
        ProfileDetails::new(
            PersonName::new(self.first_name, self.last_name)?,
            Document::new(
                DocumentType::from_code(self.document_type)?,
                self.document_number,
            )?,
            self.birth_date,
            EmailAddress::new(self.email)?,
            StreetAddress::new(
                self.street,
                self.street_number,
                self.city,
                self.postal_code,
                self.country,
            )?,
            today,
        )
    }
}

pub struct ProfilesContextFacade {
    commands: Arc<ProfileCommandService>,
    queries: Arc<ProfileQueryService>,
    clock: Arc<dyn Clock>,
}

impl ProfilesContextFacade {
    pub fn new(
        commands: Arc<ProfileCommandService>,
        queries: Arc<ProfileQueryService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            commands,
            queries,
            clock,
        }
    }

    pub fn exists_profile_by_id(&self, profile_id: i64) -> DomainResult<bool> {
        self.queries
            .exists_by_id(ExistsProfileByIdQuery { profile_id })
    }

    pub fn fetch_profile_by_id(&self, profile_id: i64) -> DomainResult<Option<Profile>> {
        self.queries.get_by_id(GetProfileByIdQuery { profile_id })
    }

    pub fn fetch_profile_id_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<Option<i64>> {
        let profile = self
            .queries
            .get_by_name(GetProfileByNameQuery::new(first_name, last_name))?;
        Ok(profile.and_then(|p| p.id()))
    }

    /// Whether a profile other than `profile_id` carries this name
    pub fn exists_profile_by_full_name_and_id_is_not(
        &self,
        first_name: &str,
        last_name: &str,
        profile_id: i64,
    ) -> DomainResult<bool> {
        Ok(self
            .fetch_profile_id_by_full_name(first_name, last_name)?
            .is_some_and(|id| id != profile_id))
    }

    pub fn create_profile(&self, values: ProfileValues) -> DomainResult<i64> {
        let details = values.into_details(self.clock.today())?;
        self.commands.create(CreateProfileCommand { details })
    }

    pub fn update_profile(&self, profile_id: i64, values: ProfileValues) -> DomainResult<i64> {
        let details = values.into_details(self.clock.today())?;
        let updated = self
            .commands
            .update(UpdateProfileCommand::new(profile_id, details)?)?;
        Ok(updated.id().unwrap_or(profile_id))
    }

    pub fn delete_profile(&self, profile_id: i64) -> DomainResult<()> {
        self.commands.delete(DeleteProfileCommand { profile_id })
    }
}
