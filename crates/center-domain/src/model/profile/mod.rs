//! Profiles context model

pub mod aggregate;
pub mod document;
pub mod email_address;
pub mod person_name;
pub mod street_address;

pub use aggregate::{age_on, Profile, ProfileDetails, MAX_AGE};
pub use document::{Document, DocumentType};
pub use email_address::EmailAddress;
pub use person_name::PersonName;
pub use street_address::StreetAddress;
