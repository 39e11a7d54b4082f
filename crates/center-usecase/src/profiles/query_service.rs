//! ProfileQueryService - read-only access to profiles
//!
//! "Not found" is an empty result here, never an error.

use std::sync::Arc;

use center_domain::query::profile_queries::{
    ExistsProfileByIdQuery, GetAllProfilesQuery, GetProfileByAgeQuery, GetProfileByEmailQuery,
    GetProfileByIdQuery, GetProfileByNameQuery,
};
use center_domain::{DomainResult, PersonName, Profile, ProfileRepository};
use tracing::debug;

pub struct ProfileQueryService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileQueryService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub fn get_all(&self, _query: GetAllProfilesQuery) -> DomainResult<Vec<Profile>> {
        debug!("listing all profiles");
        Ok(self.repository.find_all()?)
    }

    pub fn get_by_id(&self, query: GetProfileByIdQuery) -> DomainResult<Option<Profile>> {
        debug!(profile_id = query.profile_id, "fetching profile");
        Ok(self.repository.find_by_id(query.profile_id)?)
    }

    /// A name that cannot form a valid `PersonName` matches nobody.
    pub fn get_by_name(&self, query: GetProfileByNameQuery) -> DomainResult<Option<Profile>> {
        let Ok(name) = PersonName::new(query.first_name, query.last_name) else {
            return Ok(None);
        };
        debug!(%name, "fetching profile by name");
        Ok(self.repository.find_by_name(&name)?)
    }

    pub fn get_by_age(&self, query: GetProfileByAgeQuery) -> DomainResult<Vec<Profile>> {
        debug!(age = query.age, "listing profiles by age");
        Ok(self.repository.find_by_age(query.age)?)
    }

    pub fn get_by_email(&self, query: GetProfileByEmailQuery) -> DomainResult<Option<Profile>> {
        debug!(email = %query.email, "fetching profile by email");
        Ok(self.repository.find_by_email(&query.email)?)
    }

    pub fn exists_by_id(&self, query: ExistsProfileByIdQuery) -> DomainResult<bool> {
        Ok(self.repository.exists_by_id(query.profile_id)?)
    }
}
