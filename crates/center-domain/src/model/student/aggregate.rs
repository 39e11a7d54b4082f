//! Student - someone enrolled in a program
//!
//! Student is an Entity. Its `StudentCode` is generated once at creation and
//! never reassigned; the profile it belongs to is referenced by id only, so
//! the Profiles context stays behind its facade.

use super::academic_period::AcademicPeriod;
use super::identifiers::{CurriculumId, ProfileId, ProgramId, StudentCode};
use crate::command::student_commands::{
    ChangeCurriculumStudentCommand, CreateStudentCommand, TransferProgramStudentCommand,
};
use crate::model::audit::AuditStamp;

/// Student aggregate root
#[derive(Debug, Clone)]
pub struct Student {
    id: Option<i64>,
    code: StudentCode,
    profile_id: ProfileId,
    program_id: ProgramId,
    curriculum_id: CurriculumId,
    start_period: AcademicPeriod,
    audit: Option<AuditStamp>,
}

impl Student {
    /// Enroll a new student starting in `current_period`
    pub fn new(command: &CreateStudentCommand, current_period: AcademicPeriod) -> Self {
        Self {
            id: None,
            code: StudentCode::generate(),
            profile_id: command.profile_id,
            program_id: command.program_id,
            curriculum_id: command.curriculum_id,
            start_period: current_period,
            audit: None,
        }
    }

    /// Rehydrate a stored student
    pub fn restore(
        id: i64,
        code: StudentCode,
        profile_id: ProfileId,
        program_id: ProgramId,
        curriculum_id: CurriculumId,
        start_period: AcademicPeriod,
        audit: AuditStamp,
    ) -> Self {
        Self {
            id: Some(id),
            code,
            profile_id,
            program_id,
            curriculum_id,
            start_period,
            audit: Some(audit),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn code(&self) -> &StudentCode {
        &self.code
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    pub fn program_id(&self) -> ProgramId {
        self.program_id
    }

    pub fn curriculum_id(&self) -> CurriculumId {
        self.curriculum_id
    }

    pub fn start_period(&self) -> AcademicPeriod {
        self.start_period
    }

    pub fn audit(&self) -> Option<&AuditStamp> {
        self.audit.as_ref()
    }

    // ========== Mutations ==========

    /// Move to another program; the student restarts in `current_period`.
    pub fn update_program(
        &mut self,
        command: &TransferProgramStudentCommand,
        current_period: AcademicPeriod,
    ) {
        self.program_id = command.program_id;
        self.curriculum_id = command.curriculum_id;
        self.start_period = current_period;
    }

    /// Switch curriculum within the same program
    pub fn update_curriculum(&mut self, command: &ChangeCurriculumStudentCommand) {
        self.curriculum_id = command.curriculum_id;
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        // The code is the identity, stored or not
        self.code == other.code
    }
}

impl Eq for Student {}
