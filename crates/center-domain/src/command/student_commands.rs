use crate::error::DomainResult;
use crate::model::student::{CurriculumId, ProfileId, ProgramId, StudentCode};

/// Enroll the owner of a profile as a student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateStudentCommand {
    pub profile_id: ProfileId,
    pub program_id: ProgramId,
    pub curriculum_id: CurriculumId,
}

impl CreateStudentCommand {
    pub fn new(profile_id: i64, program_id: i64, curriculum_id: i64) -> DomainResult<Self> {
        Ok(Self {
            profile_id: ProfileId::new(profile_id)?,
            program_id: ProgramId::new(program_id)?,
            curriculum_id: CurriculumId::new(curriculum_id)?,
        })
    }
}

/// Move a student to another program and curriculum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferProgramStudentCommand {
    pub student_code: StudentCode,
    pub program_id: ProgramId,
    pub curriculum_id: CurriculumId,
}

impl TransferProgramStudentCommand {
    pub fn new(student_code: StudentCode, program_id: i64, curriculum_id: i64) -> DomainResult<Self> {
        Ok(Self {
            student_code,
            program_id: ProgramId::new(program_id)?,
            curriculum_id: CurriculumId::new(curriculum_id)?,
        })
    }
}

/// Switch a student's curriculum within the current program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCurriculumStudentCommand {
    pub student_code: StudentCode,
    pub curriculum_id: CurriculumId,
}

impl ChangeCurriculumStudentCommand {
    pub fn new(student_code: StudentCode, curriculum_id: i64) -> DomainResult<Self> {
        Ok(Self {
            student_code,
            curriculum_id: CurriculumId::new(curriculum_id)?,
        })
    }
}

/// Remove a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentCommand {
    pub student_code: StudentCode,
}
