//! In-Memory Repository Implementations
//!
//! Both repositories share a [`Database`]. Unique indexes are enforced inside
//! the write lock, so they hold even when two requests race past the
//! services' existence checks.

use std::sync::Arc;

use center_domain::{
    AuditStamp, Clock, Document, EmailAddress, PersonName, Profile, ProfileId,
    ProfileRepository, RepositoryError, Student, StudentCode, StudentRepository,
};

use super::records::{ProfileRecord, StudentRecord};
use super::store::Database;

pub const PROFILES_EMAIL_INDEX: &str = "profiles.email";
pub const PROFILES_DOCUMENT_INDEX: &str = "profiles.document";
pub const STUDENTS_CODE_INDEX: &str = "students.code";
pub const STUDENTS_PROFILE_INDEX: &str = "students.profile_id";

/// Audit stamp for a row: fresh on insert, touched on update
fn stamp(existing: Option<AuditStamp>, clock: &dyn Clock) -> AuditStamp {
    let now = clock.now();
    existing.map_or_else(|| AuditStamp::created(now), |audit| audit.touched(now))
}

/// Profile repository over the shared tables
#[derive(Clone)]
pub struct InMemoryProfileRepository {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl InMemoryProfileRepository {
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    fn collect(
        &self,
        keep: impl Fn(&ProfileRecord) -> bool,
    ) -> Result<Vec<Profile>, RepositoryError> {
        self.db
            .read(|t| {
                t.profiles
                    .values()
                    .filter(|r| keep(r))
                    .map(ProfileRecord::to_profile)
                    .collect::<Result<Vec<_>, _>>()
            })?
    }

    fn first(
        &self,
        keep: impl Fn(&ProfileRecord) -> bool,
    ) -> Result<Option<Profile>, RepositoryError> {
        self.db
            .read(|t| t.profiles.values().find(|r| keep(r)).map(ProfileRecord::to_profile))?
            .transpose()
    }

    fn any(&self, keep: impl Fn(&ProfileRecord) -> bool) -> Result<bool, RepositoryError> {
        self.db.read(|t| t.profiles.values().any(|r| keep(r)))
    }
}

fn same_document(record: &ProfileRecord, document: &Document) -> bool {
    record.document_type == document.document_type().code()
        && record.document_number == document.number()
}

impl ProfileRepository for InMemoryProfileRepository {
    fn save(&self, profile: &Profile) -> Result<Profile, RepositoryError> {
        let record = self.db.write(|t| {
            // An id means an update, and the row must still be there
            let (id, existing) = match profile.id() {
                Some(id) => match t.profiles.get(&id) {
                    Some(row) => (id, Some(row.audit())),
                    None => {
                        return Err(RepositoryError::storage(format!(
                            "profile {} no longer exists",
                            id
                        )))
                    }
                },
                None => (t.next_profile_id(), None),
            };
            let record =
                ProfileRecord::from_profile(id, profile, stamp(existing, self.clock.as_ref()));
            record.check_columns()?;

            let others = || t.profiles.values().filter(|r| r.id != id);
            if others().any(|r| r.email == record.email) {
                return Err(RepositoryError::unique(PROFILES_EMAIL_INDEX));
            }
            if others().any(|r| same_document(r, profile.document())) {
                return Err(RepositoryError::unique(PROFILES_DOCUMENT_INDEX));
            }

            t.profiles.insert(id, record.clone());
            Ok(record)
        })?;
        record.to_profile()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepositoryError> {
        self.db
            .read(|t| t.profiles.get(&id).map(ProfileRecord::to_profile))?
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        self.collect(|_| true)
    }

    fn find_by_name(&self, name: &PersonName) -> Result<Option<Profile>, RepositoryError> {
        self.first(|r| r.first_name == name.first_name() && r.last_name == name.last_name())
    }

    fn find_by_age(&self, age: i32) -> Result<Vec<Profile>, RepositoryError> {
        self.collect(|r| i32::from(r.age) == age)
    }

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, RepositoryError> {
        self.first(|r| r.email == email.as_str())
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        self.db.read(|t| t.profiles.contains_key(&id))
    }

    fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, RepositoryError> {
        self.any(|r| r.email == email.as_str())
    }

    fn exists_by_document(&self, document: &Document) -> Result<bool, RepositoryError> {
        self.any(|r| same_document(r, document))
    }

    fn exists_by_email_and_id_is_not(
        &self,
        email: &EmailAddress,
        id: i64,
    ) -> Result<bool, RepositoryError> {
        self.any(|r| r.email == email.as_str() && r.id != id)
    }

    fn exists_by_document_and_id_is_not(
        &self,
        document: &Document,
        id: i64,
    ) -> Result<bool, RepositoryError> {
        self.any(|r| same_document(r, document) && r.id != id)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.db.write(|t| {
            t.profiles.remove(&id);
            Ok(())
        })
    }
}

/// Student repository over the shared tables
#[derive(Clone)]
pub struct InMemoryStudentRepository {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl InMemoryStudentRepository {
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    fn first(
        &self,
        keep: impl Fn(&StudentRecord) -> bool,
    ) -> Result<Option<Student>, RepositoryError> {
        self.db
            .read(|t| t.students.values().find(|r| keep(r)).map(StudentRecord::to_student))?
            .transpose()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn save(&self, student: &Student) -> Result<Student, RepositoryError> {
        let record = self.db.write(|t| {
            let (id, existing) = match student.id() {
                Some(id) => match t.students.get(&id) {
                    Some(row) => (id, Some(row.audit())),
                    None => {
                        return Err(RepositoryError::storage(format!(
                            "student {} no longer exists",
                            id
                        )))
                    }
                },
                None => (t.next_student_id(), None),
            };
            let record =
                StudentRecord::from_student(id, student, stamp(existing, self.clock.as_ref()));
            record.check_columns()?;

            let others = || t.students.values().filter(|r| r.id != id);
            if others().any(|r| r.code == record.code) {
                return Err(RepositoryError::unique(STUDENTS_CODE_INDEX));
            }
            if others().any(|r| r.profile_id == record.profile_id) {
                return Err(RepositoryError::unique(STUDENTS_PROFILE_INDEX));
            }

            t.students.insert(id, record.clone());
            Ok(record)
        })?;
        record.to_student()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Student>, RepositoryError> {
        self.db
            .read(|t| t.students.get(&id).map(StudentRecord::to_student))?
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        self.db.read(|t| {
            t.students
                .values()
                .map(StudentRecord::to_student)
                .collect::<Result<Vec<_>, _>>()
        })?
    }

    fn find_by_code(&self, code: &StudentCode) -> Result<Option<Student>, RepositoryError> {
        self.first(|r| r.code == code.as_str())
    }

    fn find_by_profile_id(&self, profile_id: ProfileId) -> Result<Option<Student>, RepositoryError> {
        self.first(|r| r.profile_id == profile_id.value())
    }

    fn exists_by_code(&self, code: &StudentCode) -> Result<bool, RepositoryError> {
        self.db
            .read(|t| t.students.values().any(|r| r.code == code.as_str()))
    }

    fn exists_by_profile_id(&self, profile_id: ProfileId) -> Result<bool, RepositoryError> {
        self.db
            .read(|t| t.students.values().any(|r| r.profile_id == profile_id.value()))
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.db.write(|t| {
            t.students.remove(&id);
            Ok(())
        })
    }
}
