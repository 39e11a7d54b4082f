//! AcademicPeriod - the term in which a student started
//!
//! Labels look like `2026-2`: the year, then `1` for January to July or `2`
//! for August to December.

use chrono::{Datelike, NaiveDate};

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AcademicPeriod {
    year: i32,
    term: u8,
}

impl AcademicPeriod {
    pub const MAX_LABEL_LENGTH: usize = 6;

    /// The period a calendar day falls into
    pub fn containing(date: NaiveDate) -> Self {
        let term = if date.month() <= 7 { 1 } else { 2 };
        Self {
            year: date.year(),
            term,
        }
    }

    /// Parse a stored label such as `2026-1`
    pub fn parse(label: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation(format!("Invalid academic period: {}", label));

        let (year, term) = label.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let term: u8 = term.parse().map_err(|_| invalid())?;

        if !(1000..=9999).contains(&year) || !(1..=2).contains(&term) {
            return Err(invalid());
        }

        Ok(Self { year, term })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn term(&self) -> u8 {
        self.term
    }
}

impl core::fmt::Display for AcademicPeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.year, self.term)
    }
}
