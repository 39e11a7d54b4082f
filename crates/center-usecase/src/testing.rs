//! Fakes and fixtures shared by the service tests

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use center_domain::{
    AuditStamp, Clock, Document, DocumentType, DomainResult, EmailAddress, FixedClock,
    PersonName, Profile, ProfileDetails, ProfileId, ProfileRepository, RepositoryError,
    StreetAddress, Student, StudentCode, StudentRepository,
};
use chrono::NaiveDate;

use crate::profiles::ProfileValues;
use crate::students::ExternalProfileService;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

pub fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(2026, 10, 19).unwrap())
}

/// Valid details for a DNI holder born 1990-01-01
pub fn details(first: &str, last: &str, dni: &str, email: &str) -> ProfileDetails {
    ProfileDetails::new(
        PersonName::new(first, last).unwrap(),
        Document::new(DocumentType::Dni, dni).unwrap(),
        birth_date(),
        EmailAddress::new(email).unwrap(),
        StreetAddress::new("Main", "12", "Lima", "15001", "PE").unwrap(),
        today(),
    )
    .unwrap()
}

pub fn values(first: &str, last: &str, dni: &str, email: &str) -> ProfileValues {
    ProfileValues {
        first_name: first.to_string(),
        last_name: last.to_string(),
        document_type: DocumentType::Dni.code(),
        document_number: dni.to_string(),
        birth_date: birth_date(),
        email: email.to_string(),
        street: "Main".to_string(),
        street_number: "12".to_string(),
        city: "Lima".to_string(),
        postal_code: "15001".to_string(),
        country: "PE".to_string(),
    }
}

#[derive(Default)]
pub struct MemoryProfileRepository {
    rows: Mutex<BTreeMap<i64, Profile>>,
}

impl ProfileRepository for MemoryProfileRepository {
    fn save(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = profile
            .id()
            .unwrap_or_else(|| rows.keys().next_back().map_or(1, |last| last + 1));
        let stored = Profile::restore(
            id,
            profile.details().clone(),
            AuditStamp::created(chrono::Utc::now()),
        );
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn find_by_name(&self, name: &PersonName) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.find_all()?.into_iter().find(|p| p.name() == name))
    }

    fn find_by_age(&self, age: i32) -> Result<Vec<Profile>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|p| i32::from(p.age()) == age)
            .collect())
    }

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.find_all()?.into_iter().find(|p| p.email() == email))
    }

    fn exists_by_document(&self, document: &Document) -> Result<bool, RepositoryError> {
        Ok(self.find_all()?.iter().any(|p| p.document() == document))
    }

    fn exists_by_document_and_id_is_not(
        &self,
        document: &Document,
        id: i64,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .find_all()?
            .iter()
            .any(|p| p.document() == document && p.id() != Some(id)))
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Empty store whose writes always fail
pub struct FailingProfileRepository;

impl ProfileRepository for FailingProfileRepository {
    fn save(&self, _profile: &Profile) -> Result<Profile, RepositoryError> {
        Err(RepositoryError::storage("disk unavailable"))
    }

    fn find_by_id(&self, _id: i64) -> Result<Option<Profile>, RepositoryError> {
        Ok(None)
    }

    fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        Ok(Vec::new())
    }

    fn find_by_name(&self, _name: &PersonName) -> Result<Option<Profile>, RepositoryError> {
        Ok(None)
    }

    fn find_by_age(&self, _age: i32) -> Result<Vec<Profile>, RepositoryError> {
        Ok(Vec::new())
    }

    fn find_by_email(&self, _email: &EmailAddress) -> Result<Option<Profile>, RepositoryError> {
        Ok(None)
    }

    fn exists_by_document(&self, _document: &Document) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn exists_by_document_and_id_is_not(
        &self,
        _document: &Document,
        _id: i64,
    ) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn delete_by_id(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::storage("disk unavailable"))
    }
}

#[derive(Default)]
pub struct MemoryStudentRepository {
    rows: Mutex<BTreeMap<i64, Student>>,
}

impl StudentRepository for MemoryStudentRepository {
    fn save(&self, student: &Student) -> Result<Student, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = student
            .id()
            .unwrap_or_else(|| rows.keys().next_back().map_or(1, |last| last + 1));
        let stored = Student::restore(
            id,
            student.code().clone(),
            student.profile_id(),
            student.program_id(),
            student.curriculum_id(),
            student.start_period(),
            AuditStamp::created(chrono::Utc::now()),
        );
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn find_by_code(&self, code: &StudentCode) -> Result<Option<Student>, RepositoryError> {
        Ok(self.find_all()?.into_iter().find(|s| s.code() == code))
    }

    fn find_by_profile_id(&self, profile_id: ProfileId) -> Result<Option<Student>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|s| s.profile_id() == profile_id))
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Empty store whose writes always fail
pub struct FailingStudentRepository;

impl StudentRepository for FailingStudentRepository {
    fn save(&self, _student: &Student) -> Result<Student, RepositoryError> {
        Err(RepositoryError::storage("disk unavailable"))
    }

    fn find_by_id(&self, _id: i64) -> Result<Option<Student>, RepositoryError> {
        Ok(None)
    }

    fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(Vec::new())
    }

    fn find_by_code(&self, _code: &StudentCode) -> Result<Option<Student>, RepositoryError> {
        Ok(None)
    }

    fn find_by_profile_id(&self, _profile_id: ProfileId) -> Result<Option<Student>, RepositoryError> {
        Ok(None)
    }

    fn delete_by_id(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::storage("disk unavailable"))
    }
}

/// Profiles context stand-in that knows a fixed set of ids
pub struct StubProfiles {
    known: BTreeSet<i64>,
}

impl StubProfiles {
    pub fn with(ids: &[i64]) -> Self {
        Self {
            known: ids.iter().copied().collect(),
        }
    }
}

impl ExternalProfileService for StubProfiles {
    fn exists_profile_by_id(&self, profile_id: ProfileId) -> DomainResult<bool> {
        Ok(self.known.contains(&profile_id.value()))
    }

    fn fetch_profile_id_by_full_name(
        &self,
        _first_name: &str,
        _last_name: &str,
    ) -> DomainResult<Option<ProfileId>> {
        Ok(None)
    }
}
