//! StreetAddress - postal address of a profile holder

use crate::error::{DomainError, DomainResult};

pub const MAX_STREET_NUMBER_LENGTH: usize = 5;
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Value Object: street, number, city, postal code and country
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreetAddress {
    street: String,
    number: String,
    city: String,
    postal_code: String,
    country: String,
}

impl StreetAddress {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let street = street.into();
        let number = number.into();
        let city = city.into();
        let postal_code = postal_code.into();
        let country = country.into();

        if street.trim().is_empty() {
            return Err(DomainError::validation("Street cannot be null or blank"));
        }
        if number.trim().is_empty() {
            return Err(DomainError::validation(
                "Street Number cannot be null or blank",
            ));
        }
        if number.chars().count() > MAX_STREET_NUMBER_LENGTH {
            return Err(DomainError::validation(format!(
                "Street Number cannot have more than {} digits",
                MAX_STREET_NUMBER_LENGTH
            )));
        }
        if city.trim().is_empty() {
            return Err(DomainError::validation("City cannot be null or blank"));
        }
        if postal_code.trim().is_empty() {
            return Err(DomainError::validation("Postal code cannot be null or blank"));
        }
        if postal_code.len() != POSTAL_CODE_LENGTH
            || !postal_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::validation(format!(
                "Postal code must be {} digits long",
                POSTAL_CODE_LENGTH
            )));
        }
        if country.trim().is_empty() {
            return Err(DomainError::validation("Country cannot be null or blank"));
        }

        Ok(Self {
            street,
            number,
            city,
            postal_code,
            country,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// "Street Number, City, PostalCode, Country"
    pub fn full_address(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street, self.number, self.city, self.postal_code, self.country
        )
    }
}
