//! StudentQueryService - read-only access to students

use std::sync::Arc;

use center_domain::query::student_queries::{
    GetAllStudentsQuery, GetStudentByCodeQuery, GetStudentByIdQuery, GetStudentByProfileIdQuery,
};
use center_domain::{DomainResult, Student, StudentRepository};
use tracing::debug;

pub struct StudentQueryService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentQueryService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub fn get_all(&self, _query: GetAllStudentsQuery) -> DomainResult<Vec<Student>> {
        debug!("listing all students");
        Ok(self.repository.find_all()?)
    }

    pub fn get_by_id(&self, query: GetStudentByIdQuery) -> DomainResult<Option<Student>> {
        Ok(self.repository.find_by_id(query.student_id)?)
    }

    pub fn get_by_code(&self, query: GetStudentByCodeQuery) -> DomainResult<Option<Student>> {
        debug!(student_code = %query.student_code, "fetching student");
        Ok(self.repository.find_by_code(&query.student_code)?)
    }

    pub fn get_by_profile_id(
        &self,
        query: GetStudentByProfileIdQuery,
    ) -> DomainResult<Option<Student>> {
        Ok(self.repository.find_by_profile_id(query.profile_id)?)
    }
}
