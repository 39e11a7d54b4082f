//! /api/v1/students handlers

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use center_domain::command::student_commands::{
    ChangeCurriculumStudentCommand, CreateStudentCommand, DeleteStudentCommand,
    TransferProgramStudentCommand,
};
use center_domain::query::student_queries::{GetAllStudentsQuery, GetStudentByCodeQuery};
use center_domain::{DomainError, StudentCode};

use super::assemblers::{to_student_minimal, to_student_resource};
use super::error::ApiResult;
use super::resources::{
    ChangeCurriculumStudentResource, CreateStudentResource, StudentMinimalResource,
    StudentResource, TransferProgramStudentResource,
};
use super::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_students).post(create_student))
        .route(
            "/{student_code}",
            get(get_student_by_code).delete(delete_student),
        )
        .route("/{student_code}/transfer", put(transfer_program))
        .route("/{student_code}/curriculum", put(change_curriculum))
}

fn parse_code(path: Result<Path<String>, PathRejection>) -> ApiResult<StudentCode> {
    let Path(code) = path?;
    Ok(StudentCode::parse(code)?)
}

async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentResource>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StudentResource>)> {
    let Json(resource) = payload?;
    let command = CreateStudentCommand::new(
        resource.profile_id,
        resource.program_id,
        resource.curriculum_id,
    )?;

    let student_code = state.student_commands.create(command)?;
    let student = state
        .student_queries
        .get_by_code(GetStudentByCodeQuery {
            student_code: student_code.clone(),
        })?
        .ok_or_else(|| {
            DomainError::not_found(format!("Student not found with code {}", student_code))
        })?;

    Ok((StatusCode::CREATED, Json(to_student_resource(&student))))
}

async fn get_all_students(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StudentResource>>> {
    let students = state.student_queries.get_all(GetAllStudentsQuery)?;
    Ok(Json(students.iter().map(to_student_resource).collect()))
}

async fn get_student_by_code(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<StudentResource>> {
    let student_code = parse_code(path)?;
    let student = state
        .student_queries
        .get_by_code(GetStudentByCodeQuery {
            student_code: student_code.clone(),
        })?
        .ok_or_else(|| {
            DomainError::not_found(format!("Student not found with code {}", student_code))
        })?;
    Ok(Json(to_student_resource(&student)))
}

async fn transfer_program(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<TransferProgramStudentResource>, JsonRejection>,
) -> ApiResult<Json<StudentResource>> {
    let student_code = parse_code(path)?;
    let Json(resource) = payload?;
    let command = TransferProgramStudentCommand::new(
        student_code,
        resource.program_id,
        resource.curriculum_id,
    )?;

    let student = state.student_commands.transfer_program(command)?;
    Ok(Json(to_student_resource(&student)))
}

async fn change_curriculum(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ChangeCurriculumStudentResource>, JsonRejection>,
) -> ApiResult<Json<StudentMinimalResource>> {
    let student_code = parse_code(path)?;
    let Json(resource) = payload?;
    let command = ChangeCurriculumStudentCommand::new(student_code, resource.curriculum_id)?;

    let student = state.student_commands.change_curriculum(command)?;
    Ok(Json(to_student_minimal(&student)))
}

async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let student_code = parse_code(path)?;
    state
        .student_commands
        .delete(DeleteStudentCommand { student_code })?;
    Ok(StatusCode::NO_CONTENT)
}
