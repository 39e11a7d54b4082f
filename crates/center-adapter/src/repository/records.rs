//! Table rows and their column limits
//!
//! Rows hold plain column values. Converting a row back into an aggregate
//! re-runs the value-object constructors, so a hand-edited snapshot cannot
//! smuggle invalid data into the domain.

use center_domain::{
    AcademicPeriod, AuditStamp, CurriculumId, Document, DocumentType, DomainError, EmailAddress,
    PersonName, Profile, ProfileDetails, ProfileId, ProgramId, RepositoryError, StreetAddress,
    Student, StudentCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub document_type: i32,
    pub document_number: String,
    pub birth_date: NaiveDate,
    pub age: u8,
    pub email: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub code: String,
    pub profile_id: i64,
    pub program_id: i64,
    pub curriculum_id: i64,
    pub start_period: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_length(column: &str, value: &str, max: usize) -> Result<(), RepositoryError> {
    if value.chars().count() > max {
        return Err(RepositoryError::storage(format!(
            "value too long for column {} (max {})",
            column, max
        )));
    }
    Ok(())
}

fn corrupt(table: &str, id: i64, reason: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::storage(format!("corrupt {} row {}: {}", table, id, reason))
}

impl ProfileRecord {
    pub fn from_profile(id: i64, profile: &Profile, audit: AuditStamp) -> Self {
        let name = profile.name();
        let document = profile.document();
        let address = profile.address();
        Self {
            id,
            first_name: name.first_name().to_string(),
            last_name: name.last_name().to_string(),
            document_type: document.document_type().code(),
            document_number: document.number().to_string(),
            birth_date: profile.birth_date(),
            age: profile.age(),
            email: profile.email().as_str().to_string(),
            street: address.street().to_string(),
            street_number: address.number().to_string(),
            city: address.city().to_string(),
            postal_code: address.postal_code().to_string(),
            country: address.country().to_string(),
            created_at: audit.created_at(),
            updated_at: audit.updated_at(),
        }
    }

    pub fn check_columns(&self) -> Result<(), RepositoryError> {
        check_length("profiles.first_name", &self.first_name, 50)?;
        check_length("profiles.last_name", &self.last_name, 50)?;
        check_length("profiles.document_number", &self.document_number, 15)?;
        check_length("profiles.email", &self.email, 100)?;
        check_length("profiles.street", &self.street, 100)?;
        check_length("profiles.street_number", &self.street_number, 5)?;
        check_length("profiles.city", &self.city, 20)?;
        check_length("profiles.postal_code", &self.postal_code, 5)?;
        check_length("profiles.country", &self.country, 20)
    }

    pub fn audit(&self) -> AuditStamp {
        AuditStamp::new(self.created_at, self.updated_at)
    }

    pub fn to_profile(&self) -> Result<Profile, RepositoryError> {
        let bad = |e: DomainError| corrupt("profiles", self.id, e);
        let document_type = DocumentType::from_code(self.document_type).map_err(bad)?;
        let details = ProfileDetails::restore(
            PersonName::new(&self.first_name, &self.last_name).map_err(bad)?,
            Document::new(document_type, &self.document_number).map_err(bad)?,
            self.birth_date,
            self.age,
            EmailAddress::new(&self.email).map_err(bad)?,
            StreetAddress::new(
                &self.street,
                &self.street_number,
                &self.city,
                &self.postal_code,
                &self.country,
            )
            .map_err(bad)?,
        )
        .map_err(bad)?;
        Ok(Profile::restore(self.id, details, self.audit()))
    }
}

impl StudentRecord {
    pub fn from_student(id: i64, student: &Student, audit: AuditStamp) -> Self {
        Self {
            id,
            code: student.code().as_str().to_string(),
            profile_id: student.profile_id().value(),
            program_id: student.program_id().value(),
            curriculum_id: student.curriculum_id().value(),
            start_period: student.start_period().to_string(),
            created_at: audit.created_at(),
            updated_at: audit.updated_at(),
        }
    }

    pub fn check_columns(&self) -> Result<(), RepositoryError> {
        check_length("students.code", &self.code, 36)?;
        check_length(
            "students.start_period",
            &self.start_period,
            AcademicPeriod::MAX_LABEL_LENGTH,
        )
    }

    pub fn audit(&self) -> AuditStamp {
        AuditStamp::new(self.created_at, self.updated_at)
    }

    pub fn to_student(&self) -> Result<Student, RepositoryError> {
        let bad = |e: DomainError| corrupt("students", self.id, e);
        Ok(Student::restore(
            self.id,
            StudentCode::parse(&self.code).map_err(bad)?,
            ProfileId::new(self.profile_id).map_err(bad)?,
            ProgramId::new(self.program_id).map_err(bad)?,
            CurriculumId::new(self.curriculum_id).map_err(bad)?,
            AcademicPeriod::parse(&self.start_period).map_err(bad)?,
            self.audit(),
        ))
    }
}
