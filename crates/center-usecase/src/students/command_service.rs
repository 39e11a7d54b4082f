//! StudentCommandService - enroll, transfer, re-curriculum and remove students
//!
//! Every operation is a single check-then-write. Nothing here prevents two
//! concurrent enrollments for one profile from both passing the check; the
//! store's unique index on `profile_id` rejects the second write, and that
//! rejection surfaces as a conflict.

use std::sync::Arc;

use center_domain::command::student_commands::{
    ChangeCurriculumStudentCommand, CreateStudentCommand, DeleteStudentCommand,
    TransferProgramStudentCommand,
};
use center_domain::{
    AcademicPeriod, Clock, DomainError, DomainResult, Student, StudentCode, StudentRepository,
};
use tracing::{error, info, warn};

use super::external_profile::ExternalProfileService;

pub struct StudentCommandService {
    repository: Arc<dyn StudentRepository>,
    profiles: Arc<dyn ExternalProfileService>,
    clock: Arc<dyn Clock>,
}

impl StudentCommandService {
    pub fn new(
        repository: Arc<dyn StudentRepository>,
        profiles: Arc<dyn ExternalProfileService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            profiles,
            clock,
        }
    }

    fn current_period(&self) -> AcademicPeriod {
        AcademicPeriod::containing(self.clock.today())
    }

    /// Enroll a student and return the generated code
    pub fn create(&self, command: CreateStudentCommand) -> DomainResult<StudentCode> {
        let profile_id = command.profile_id;

        if self.repository.exists_by_profile_id(profile_id)? {
            warn!(%profile_id, "student rejected: profile already enrolled");
            return Err(DomainError::conflict(
                "Student with profile ID already exists",
            ));
        }

        if !self.profiles.exists_profile_by_id(profile_id)? {
            warn!(%profile_id, "student rejected: unknown profile");
            return Err(DomainError::validation(
                "Profile ID does not exist in external Profile Service",
            ));
        }

        let student = Student::new(&command, self.current_period());
        let saved = self.repository.save(&student).map_err(|e| {
            error!(%profile_id, error = %e, "failed to save student");
            DomainError::from_repository("Unable to create student", e)
        })?;

        info!(student_code = %saved.code(), %profile_id, "student created");
        Ok(saved.code().clone())
    }

    /// Move a student to another program; the start period resets
    pub fn transfer_program(&self, command: TransferProgramStudentCommand) -> DomainResult<Student> {
        let mut student = self.load(&command.student_code)?;

        student.update_program(&command, self.current_period());

        let updated = self.repository.save(&student).map_err(|e| {
            error!(student_code = %command.student_code, error = %e, "failed to transfer student");
            DomainError::from_repository("Error while updating student program", e)
        })?;

        info!(
            student_code = %updated.code(),
            program_id = updated.program_id().value(),
            curriculum_id = updated.curriculum_id().value(),
            "student transferred"
        );
        Ok(updated)
    }

    pub fn change_curriculum(
        &self,
        command: ChangeCurriculumStudentCommand,
    ) -> DomainResult<Student> {
        let mut student = self.load(&command.student_code)?;

        student.update_curriculum(&command);

        let updated = self.repository.save(&student).map_err(|e| {
            error!(student_code = %command.student_code, error = %e, "failed to change curriculum");
            DomainError::from_repository("Error while updating student curriculum", e)
        })?;

        info!(
            student_code = %updated.code(),
            curriculum_id = updated.curriculum_id().value(),
            "student curriculum changed"
        );
        Ok(updated)
    }

    /// Remove a student. A concurrent removal after the lookup is not an error.
    pub fn delete(&self, command: DeleteStudentCommand) -> DomainResult<()> {
        let student = self.load(&command.student_code)?;

        if let Some(id) = student.id() {
            self.repository.delete_by_id(id).map_err(|e| {
                error!(student_code = %command.student_code, error = %e, "failed to delete student");
                DomainError::from_repository("Error while deleting student", e)
            })?;
        }

        info!(student_code = %command.student_code, "student deleted");
        Ok(())
    }

    fn load(&self, code: &StudentCode) -> DomainResult<Student> {
        self.repository.find_by_code(code)?.ok_or_else(|| {
            warn!(student_code = %code, "student not found");
            DomainError::not_found(format!("Student not found with code {}", code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{clock, FailingStudentRepository, MemoryStudentRepository, StubProfiles};
    use center_domain::ProfileId;

    fn build(known: &[i64]) -> (StudentCommandService, Arc<MemoryStudentRepository>) {
        let repo = Arc::new(MemoryStudentRepository::default());
        let service = StudentCommandService::new(
            repo.clone(),
            Arc::new(StubProfiles::with(known)),
            clock(),
        );
        (service, repo)
    }

    #[test]
    fn test_create_student() {
        let (service, repo) = build(&[7]);

        let code = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        assert!(!code.as_str().trim().is_empty());
        let stored = repo.find_by_code(&code).unwrap().unwrap();
        assert_eq!(stored.profile_id(), ProfileId::new(7).unwrap());
        assert_eq!(stored.start_period().to_string(), "2026-2");
    }

    #[test]
    fn test_create_twice_for_same_profile_conflicts() {
        let (service, _) = build(&[7]);
        service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        let err = service
            .create(CreateStudentCommand::new(7, 2, 2).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn test_create_for_unknown_profile_is_validation_error() {
        let (service, repo) = build(&[]);

        let err = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_transfer_program() {
        let (service, _) = build(&[7]);
        let code = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        let student = service
            .transfer_program(TransferProgramStudentCommand::new(code.clone(), 2, 2).unwrap())
            .unwrap();

        assert_eq!(student.code(), &code);
        assert_eq!(student.program_id().value(), 2);
        assert_eq!(student.curriculum_id().value(), 2);
        assert_eq!(student.start_period().to_string(), "2026-2");
    }

    #[test]
    fn test_transfer_unknown_code_leaves_storage_unchanged() {
        let (service, repo) = build(&[7]);
        service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();
        let before = repo.find_all().unwrap();

        let missing = StudentCode::parse("does-not-exist").unwrap();
        let err = service
            .transfer_program(TransferProgramStudentCommand::new(missing, 2, 2).unwrap())
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        let after = repo.find_all().unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].program_id(), before[0].program_id());
    }

    #[test]
    fn test_change_curriculum() {
        let (service, _) = build(&[7]);
        let code = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        let student = service
            .change_curriculum(ChangeCurriculumStudentCommand::new(code, 5).unwrap())
            .unwrap();
        assert_eq!(student.curriculum_id().value(), 5);
        assert_eq!(student.program_id().value(), 1);
    }

    #[test]
    fn test_change_curriculum_unknown_code_is_not_found() {
        let (service, repo) = build(&[7]);
        service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        let missing = StudentCode::parse("does-not-exist").unwrap();
        let err = service
            .change_curriculum(ChangeCurriculumStudentCommand::new(missing, 5).unwrap())
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        let after = repo.find_all().unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].curriculum_id().value(), 1);
    }

    #[test]
    fn test_delete_student() {
        let (service, repo) = build(&[7]);
        let code = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap();

        service
            .delete(DeleteStudentCommand {
                student_code: code.clone(),
            })
            .unwrap();
        assert!(repo.find_by_code(&code).unwrap().is_none());

        let err = service
            .delete(DeleteStudentCommand { student_code: code })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_storage_failure_is_persistence_error() {
        let service = StudentCommandService::new(
            Arc::new(FailingStudentRepository),
            Arc::new(StubProfiles::with(&[7])),
            clock(),
        );

        let err = service
            .create(CreateStudentCommand::new(7, 1, 1).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
