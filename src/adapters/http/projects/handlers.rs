//! HTTP handlers for project endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{parse_param, ApiError};
use crate::adapters::http::extract::{ActingUser, AuthenticationRequired};
use crate::adapters::http::state::AppState;
use crate::application::{
    CreateProjectCommand, DeleteProjectCommand, GetProjectQuery, ListProjectsQuery,
};
use crate::domain::foundation::{ProjectId, UserId};

use super::dto::{CreateProjectRequest, ListProjectsParams, ProjectResponse};

/// POST /api/projects - Create a project owned by the caller
///
/// The owner is `createdBy` from the body, falling back to `X-User-Id`.
pub async fn create_project(
    State(state): State<AppState>,
    acting: Option<ActingUser>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut request) = payload?;

    let owner_id = match (request.created_by.take(), acting) {
        (Some(raw), _) => parse_param::<UserId>("createdBy", &raw)?,
        (None, Some(ActingUser(user_id))) => user_id,
        (None, None) => return Ok(AuthenticationRequired.into_response()),
    };
    let cmd = CreateProjectCommand {
        owner_id,
        input: request.into_new_project()?,
    };

    let project = state.create_project_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))).into_response())
}

/// GET /api/projects - Search and list projects, newest activity first
pub async fn list_projects(
    State(state): State<AppState>,
    params: Result<Query<ListProjectsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = ListProjectsQuery {
        filter: params.into_filter()?,
    };

    let projects = state.list_projects_handler().handle(query).await?;
    let response: Vec<ProjectResponse> = projects.iter().map(ProjectResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/projects/:id - Fetch one project
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetProjectQuery {
        project_id: parse_param::<ProjectId>("id", &id)?,
    };

    let project = state.get_project_handler().handle(query).await?;
    Ok(Json(ProjectResponse::from(&project)))
}

/// DELETE /api/projects/:id - Owner removes a project with its requests and chat
pub async fn delete_project(
    State(state): State<AppState>,
    ActingUser(requester_id): ActingUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteProjectCommand {
        project_id: parse_param::<ProjectId>("id", &id)?,
        requester_id,
    };

    state.delete_project_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
