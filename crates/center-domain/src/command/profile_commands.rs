use crate::error::{DomainError, DomainResult};
use crate::model::profile::ProfileDetails;

/// Register a new profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProfileCommand {
    pub details: ProfileDetails,
}

/// Replace every field of an existing profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub profile_id: i64,
    pub details: ProfileDetails,
}

impl UpdateProfileCommand {
    pub fn new(profile_id: i64, details: ProfileDetails) -> DomainResult<Self> {
        if profile_id < 0 {
            return Err(DomainError::validation("Profile ID cannot be negative"));
        }
        Ok(Self {
            profile_id,
            details,
        })
    }
}

/// Remove a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProfileCommand {
    pub profile_id: i64,
}
