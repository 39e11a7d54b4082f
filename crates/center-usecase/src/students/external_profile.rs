//! ExternalProfileService - what Students may ask of Profiles
//!
//! This is an outbound PORT. The Students context depends on this trait
//! only; `FacadeProfileService` fulfils it through `ProfilesContextFacade`
//! and converts raw profile ids into Students' own `ProfileId`.

use std::sync::Arc;

use center_domain::{DomainResult, ProfileId};

use crate::profiles::ProfilesContextFacade;

pub trait ExternalProfileService: Send + Sync {
    fn exists_profile_by_id(&self, profile_id: ProfileId) -> DomainResult<bool>;

    fn fetch_profile_id_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<Option<ProfileId>>;
}

/// Anti-corruption adapter over the Profiles facade
pub struct FacadeProfileService {
    facade: Arc<ProfilesContextFacade>,
}

impl FacadeProfileService {
    pub fn new(facade: Arc<ProfilesContextFacade>) -> Self {
        Self { facade }
    }
}

impl ExternalProfileService for FacadeProfileService {
    fn exists_profile_by_id(&self, profile_id: ProfileId) -> DomainResult<bool> {
        self.facade.exists_profile_by_id(profile_id.value())
    }

    fn fetch_profile_id_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<Option<ProfileId>> {
        self.facade
            .fetch_profile_id_by_full_name(first_name, last_name)?
            .map(ProfileId::new)
            .transpose()
    }
}
