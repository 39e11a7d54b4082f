//! Conversions between HTTP resources and domain types

use center_domain::model::profile::{age_on, MAX_AGE};
use center_domain::{DomainError, Profile, Student};
use center_usecase::profiles::ProfileValues;
use chrono::NaiveDate;

use super::error::{ApiError, ApiResult};
use super::resources::{
    CreateProfileResource, ProfileMinimalResource, ProfileResource, StudentMinimalResource,
    StudentResource,
};

const BIRTH_DATE_FIELD: &str = "birthDate";

/// Parse `YYYY-MM-DD` and check it is a plausible past birth date
pub fn parse_birth_date(raw: &str, today: NaiveDate) -> ApiResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        ApiError::field(
            "Date parsing failed",
            BIRTH_DATE_FIELD,
            format!("Invalid date format (YYYY-MM-DD): {}", e),
        )
    })?;

    if date >= today {
        return Err(ApiError::field(
            "Validation failed",
            BIRTH_DATE_FIELD,
            "birthDate must be in the past",
        ));
    }
    if age_on(date, today).map_or(true, |age| age > u32::from(MAX_AGE)) {
        return Err(ApiError::field(
            "Validation failed",
            BIRTH_DATE_FIELD,
            "the age must be between 0 and 100",
        ));
    }
    Ok(date)
}

pub fn to_profile_values(
    resource: CreateProfileResource,
    today: NaiveDate,
) -> ApiResult<ProfileValues> {
    let birth_date = parse_birth_date(&resource.birth_date, today)?;
    Ok(ProfileValues {
        first_name: resource.first_name,
        last_name: resource.last_name,
        document_type: resource.document_type,
        document_number: resource.document_number,
        birth_date,
        email: resource.email,
        street: resource.street,
        street_number: resource.street_number,
        city: resource.city,
        postal_code: resource.postal_code,
        country: resource.country,
    })
}

/// Only stored profiles carry an id; an unsaved one cannot be rendered
fn stored_id(profile: &Profile) -> ApiResult<i64> {
    profile
        .id()
        .ok_or_else(|| DomainError::persistence("Profile has no stored id").into())
}

pub fn to_profile_minimal(profile: &Profile) -> ApiResult<ProfileMinimalResource> {
    Ok(ProfileMinimalResource {
        id: stored_id(profile)?,
        full_name: profile.full_name(),
        document: profile.full_document(),
        birth_date: profile.birth_date(),
        email: profile.email().as_str().to_string(),
        address: profile.full_address(),
    })
}

pub fn to_profile_resource(profile: &Profile) -> ApiResult<ProfileResource> {
    let address = profile.address();
    Ok(ProfileResource {
        id: stored_id(profile)?,
        first_name: profile.name().first_name().to_string(),
        last_name: profile.name().last_name().to_string(),
        document_type: profile.document().document_type().code(),
        document_number: profile.document().number().to_string(),
        birth_date: profile.birth_date(),
        age: profile.age(),
        email: profile.email().as_str().to_string(),
        street: address.street().to_string(),
        street_number: address.number().to_string(),
        city: address.city().to_string(),
        postal_code: address.postal_code().to_string(),
        country: address.country().to_string(),
    })
}

pub fn to_student_resource(student: &Student) -> StudentResource {
    StudentResource {
        student_code: student.code().to_string(),
        profile_id: student.profile_id().value(),
        program_id: student.program_id().value(),
        curriculum_id: student.curriculum_id().value(),
        start_period: student.start_period().to_string(),
    }
}

pub fn to_student_minimal(student: &Student) -> StudentMinimalResource {
    StudentMinimalResource {
        student_code: student.code().to_string(),
        program_id: student.program_id().value(),
        curriculum_id: student.curriculum_id().value(),
        start_period: student.start_period().to_string(),
    }
}
