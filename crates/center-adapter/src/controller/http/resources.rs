//! Request and response bodies (camelCase JSON)

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResource {
    pub first_name: String,
    pub last_name: String,
    pub document_type: i32,
    pub document_number: String,
    /// `YYYY-MM-DD`; parsed by the assembler so bad dates get a field error
    pub birth_date: String,
    pub email: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Updates carry the same fields as creation
pub type UpdateProfileResource = CreateProfileResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMinimalResource {
    pub id: i64,
    pub full_name: String,
    pub document: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResource {
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
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgeParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age: Option<i32>,
}

/// `?age=` carries no filter
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentResource {
    pub profile_id: i64,
    pub program_id: i64,
    pub curriculum_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferProgramStudentResource {
    pub program_id: i64,
    pub curriculum_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCurriculumStudentResource {
    pub curriculum_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResource {
    pub student_code: String,
    pub profile_id: i64,
    pub program_id: i64,
    pub curriculum_id: i64,
    pub start_period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentMinimalResource {
    pub student_code: String,
    pub program_id: i64,
    pub curriculum_id: i64,
    pub start_period: String,
}
