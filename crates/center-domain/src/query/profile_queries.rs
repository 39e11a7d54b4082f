use crate::model::profile::EmailAddress;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProfilesQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProfileByIdQuery {
    pub profile_id: i64,
}

/// Look a profile up by first and last name (exact match)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProfileByNameQuery {
    pub first_name: String,
    pub last_name: String,
}

impl GetProfileByNameQuery {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Profiles whose stored age equals `age`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProfileByAgeQuery {
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProfileByEmailQuery {
    pub email: EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistsProfileByIdQuery {
    pub profile_id: i64,
}
