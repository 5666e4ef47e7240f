//! Project REST API handlers
//!
//! Each handler issues exactly one statement through `ProjectRepository`
//! and maps the outcome to a JSON response at this boundary.

use crate::api::message_response::MessageResponse;
use crate::{ApiError, ApiResult, AppState, CreateProjectRequest, ProjectDto, UpdateProjectRequest};

use pt_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
///
/// List all projects, in storage order. An empty table yields `[]`.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// POST /projects
///
/// Create a project and echo it back with the assigned id
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(request) = payload?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .create(&request.project_name, &request.project_owner)
        .await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /projects/{id}
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(project.into()))
}

/// PUT /projects/{id}
///
/// Overwrite both mutable fields on the matching row. An id that matches
/// no row still succeeds: the affected-row count is deliberately not
/// checked (idempotent update, asserted by tests).
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let project_id = parse_project_id(&id)?;
    let Json(request) = payload?;

    let repo = ProjectRepository::new(state.pool.clone());
    let affected = repo
        .update(project_id, &request.project_name, &request.project_owner)
        .await?;

    if affected == 0 {
        log::debug!("Update for project {} matched no rows", project_id);
    }

    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// DELETE /projects/{id}
///
/// Hard delete. Deleting a non-existent id succeeds (idempotent delete).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let project_id = parse_project_id(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let affected = repo.delete(project_id).await?;

    if affected == 0 {
        log::debug!("Delete for project {} matched no rows", project_id);
    }

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

// =============================================================================
// Helpers
// =============================================================================

/// Validate the path id before it reaches the database: a non-numeric id
/// is a 400, never a database error.
#[track_caller]
fn parse_project_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid project id: {}", raw),
        location: ErrorLocation::from(Location::caller()),
    })
}
