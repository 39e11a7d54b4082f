use crate::model::student::{ProfileId, StudentCode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllStudentsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetStudentByIdQuery {
    pub student_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStudentByCodeQuery {
    pub student_code: StudentCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetStudentByProfileIdQuery {
    pub profile_id: ProfileId,
}
