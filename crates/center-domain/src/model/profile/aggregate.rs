//! Profile - personal data of someone known to the platform
//!
//! Profile is an Entity: a surrogate numeric id is assigned on first save
//! and identifies it for the rest of its life. All mutations arrive through
//! commands.

use chrono::{Datelike, NaiveDate};

use super::document::Document;
use super::email_address::EmailAddress;
use super::person_name::PersonName;
use super::street_address::StreetAddress;
use crate::command::profile_commands::{CreateProfileCommand, UpdateProfileCommand};
use crate::error::{DomainError, DomainResult};
use crate::model::audit::AuditStamp;

pub const MAX_AGE: u8 = 100;

/// Full elapsed years between `birth_date` and `today`.
///
/// Negative spans (a birth date after today) yield `None`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Everything a profile says about a person, validated as a whole.
///
/// Shared by create and update commands so both obey the same rules:
/// birth date strictly in the past and an age within `0..=MAX_AGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    name: PersonName,
    document: Document,
    birth_date: NaiveDate,
    age: u8,
    email: EmailAddress,
    address: StreetAddress,
}

impl ProfileDetails {
    /// Build details, deriving the age from `today`.
    pub fn new(
        name: PersonName,
        document: Document,
        birth_date: NaiveDate,
        email: EmailAddress,
        address: StreetAddress,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        if birth_date >= today {
            return Err(DomainError::validation("The birthdate must be in the past"));
        }

        let age = age_on(birth_date, today)
            .and_then(|years| u8::try_from(years).ok())
            .filter(|years| *years <= MAX_AGE)
            .ok_or_else(|| DomainError::validation("the age must be between 0 and 100"))?;

        Ok(Self {
            name,
            document,
            birth_date,
            age,
            email,
            address,
        })
    }

    /// Rebuild stored details without recomputing the age.
    pub fn restore(
        name: PersonName,
        document: Document,
        birth_date: NaiveDate,
        age: u8,
        email: EmailAddress,
        address: StreetAddress,
    ) -> DomainResult<Self> {
        if age > MAX_AGE {
            return Err(DomainError::validation("the age must be between 0 and 100"));
        }

        Ok(Self {
            name,
            document,
            birth_date,
            age,
            email,
            address,
        })
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> &StreetAddress {
        &self.address
    }
}

/// Profile aggregate root
#[derive(Debug, Clone)]
pub struct Profile {
    id: Option<i64>,
    details: ProfileDetails,
    audit: Option<AuditStamp>,
}

impl Profile {
    /// A new, not yet stored profile
    pub fn new(command: &CreateProfileCommand) -> Self {
        Self {
            id: None,
            details: command.details.clone(),
            audit: None,
        }
    }

    /// Rehydrate a stored profile
    pub fn restore(id: i64, details: ProfileDetails, audit: AuditStamp) -> Self {
        Self {
            id: Some(id),
            details,
            audit: Some(audit),
        }
    }

    // ========== Getters ==========

    /// Surrogate id, `None` until first saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn details(&self) -> &ProfileDetails {
        &self.details
    }

    pub fn name(&self) -> &PersonName {
        self.details.name()
    }

    pub fn document(&self) -> &Document {
        self.details.document()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.details.birth_date()
    }

    pub fn age(&self) -> u8 {
        self.details.age()
    }

    pub fn email(&self) -> &EmailAddress {
        self.details.email()
    }

    pub fn address(&self) -> &StreetAddress {
        self.details.address()
    }

    pub fn audit(&self) -> Option<&AuditStamp> {
        self.audit.as_ref()
    }

    pub fn full_name(&self) -> String {
        self.details.name().full_name()
    }

    pub fn full_document(&self) -> String {
        self.details.document().full_document()
    }

    pub fn full_address(&self) -> String {
        self.details.address().full_address()
    }

    // ========== Mutations ==========

    /// Replace every field with the command's details
    pub fn update(&mut self, command: &UpdateProfileCommand) {
        self.details = command.details.clone();
    }

    pub fn update_name(&mut self, name: PersonName) {
        self.details.name = name;
    }

    pub fn update_email(&mut self, email: EmailAddress) {
        self.details.email = email;
    }

    pub fn update_address(&mut self, address: StreetAddress) {
        self.details.address = address;
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        // Stored profiles compare by identity; unsaved ones by content
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.details == other.details,
        }
    }
}
