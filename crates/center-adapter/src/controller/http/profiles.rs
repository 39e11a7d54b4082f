//! /api/v1/profiles handlers

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use center_domain::command::profile_commands::{
    CreateProfileCommand, DeleteProfileCommand, UpdateProfileCommand,
};
use center_domain::query::profile_queries::{
    GetAllProfilesQuery, GetProfileByAgeQuery, GetProfileByIdQuery,
};
use center_domain::DomainError;

use super::assemblers::{to_profile_minimal, to_profile_resource, to_profile_values};
use super::error::{ApiError, ApiResult};
use super::resources::{
    AgeParams, CreateProfileResource, ProfileMinimalResource, ProfileResource,
    UpdateProfileResource,
};
use super::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_profiles).post(create_profile))
        .route("/search", get(search_profiles_by_age))
        .route(
            "/{profile_id}",
            get(get_profile_by_id)
                .put(update_profile)
                .delete(delete_profile),
        )
}

async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfileResource>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProfileMinimalResource>)> {
    let Json(resource) = payload?;
    let details = to_profile_values(resource, state.clock.today())?
        .into_details(state.clock.today())?;

    let profile_id = state
        .profile_commands
        .create(CreateProfileCommand { details })?;

    let profile = state
        .profile_queries
        .get_by_id(GetProfileByIdQuery { profile_id })?
        .ok_or_else(|| ApiError::bad_request("Profile was not stored"))?;

    Ok((StatusCode::CREATED, Json(to_profile_minimal(&profile)?)))
}

async fn get_all_profiles(
    State(state): State<AppState>,
    params: Result<Query<AgeParams>, QueryRejection>,
) -> ApiResult<Json<Vec<ProfileMinimalResource>>> {
    let Query(params) = params?;
    let profiles = match params.age {
        Some(age) => state.profile_queries.get_by_age(GetProfileByAgeQuery { age })?,
        None => state.profile_queries.get_all(GetAllProfilesQuery)?,
    };
    let body = profiles
        .iter()
        .map(to_profile_minimal)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(body))
}

async fn search_profiles_by_age(
    State(state): State<AppState>,
    params: Result<Query<AgeParams>, QueryRejection>,
) -> ApiResult<Json<Vec<ProfileResource>>> {
    let Query(params) = params?;
    let age = params
        .age
        .ok_or_else(|| ApiError::bad_request("Query parameter 'age' is required"))?;

    let profiles = state
        .profile_queries
        .get_by_age(GetProfileByAgeQuery { age })?;
    let body = profiles
        .iter()
        .map(to_profile_resource)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(body))
}

async fn get_profile_by_id(
    State(state): State<AppState>,
    profile_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ProfileResource>> {
    let Path(profile_id) = profile_id?;
    // A missing profile is reported as a bad request on this route
    let profile = state
        .profile_queries
        .get_by_id(GetProfileByIdQuery { profile_id })?
        .ok_or_else(|| {
            ApiError::bad_request(format!("Profile with id {} does not exist.", profile_id))
        })?;
    Ok(Json(to_profile_resource(&profile)?))
}

async fn update_profile(
    State(state): State<AppState>,
    profile_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProfileResource>, JsonRejection>,
) -> ApiResult<Json<ProfileResource>> {
    let Path(profile_id) = profile_id?;
    let Json(resource) = payload?;
    let details = to_profile_values(resource, state.clock.today())?
        .into_details(state.clock.today())?;

    let profile = state
        .profile_commands
        .update(UpdateProfileCommand::new(profile_id, details)?)?;
    Ok(Json(to_profile_resource(&profile)?))
}

async fn delete_profile(
    State(state): State<AppState>,
    profile_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(profile_id) = profile_id?;
    if profile_id < 0 {
        return Err(DomainError::validation("Profile ID cannot be negative").into());
    }
    state
        .profile_commands
        .delete(DeleteProfileCommand { profile_id })?;
    Ok(StatusCode::NO_CONTENT)
}
