//! HTTP handlers for collaboration request endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{parse_param, ApiError};
use crate::adapters::http::extract::ActingUser;
use crate::adapters::http::state::AppState;
use crate::application::{
    GetRequestQuery, ListRequestsQuery, RespondToRequestCommand, SubmitRequestCommand,
};
use crate::domain::collaboration::{Decision, RequestStatus};
use crate::domain::foundation::{ProjectId, RequestId, UserId};

use super::dto::{
    ListRequestsParams, RequestResponse, RespondBody, RespondResponse, SubmitRequestBody,
};

/// POST /api/projects/:id/requests - Ask to join a project
pub async fn submit_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmitRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = parse_param::<ProjectId>("id", &id)?;
    let Json(body) = payload?;
    let cmd = SubmitRequestCommand {
        project_id,
        sender_user_id: parse_param::<UserId>("senderUserId", &body.sender_user_id)?,
    };

    let request = state.submit_request_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(RequestResponse::from(&request))))
}

/// GET /api/projects/:id/requests - A project's requests, oldest first
pub async fn list_requests(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<ListRequestsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = parse_param::<ProjectId>("id", &id)?;
    let Query(params) = params?;
    let status = params
        .status
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_param::<RequestStatus>("status", &s))
        .transpose()?;

    let requests = state
        .list_requests_handler()
        .handle(ListRequestsQuery { project_id, status })
        .await?;
    let response: Vec<RequestResponse> = requests.iter().map(RequestResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/requests/:id - Fetch one request
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetRequestQuery {
        request_id: parse_param::<RequestId>("id", &id)?,
    };

    let request = state.get_request_handler().handle(query).await?;
    Ok(Json(RequestResponse::from(&request)))
}

/// POST /api/requests/:id/respond - Owner accepts or rejects
pub async fn respond_to_request(
    State(state): State<AppState>,
    ActingUser(responder_id): ActingUser,
    Path(id): Path<String>,
    payload: Result<Json<RespondBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = parse_param::<RequestId>("id", &id)?;
    let Json(body) = payload?;
    let cmd = RespondToRequestCommand {
        request_id,
        decision: body.decision.parse::<Decision>()?,
        responder_id,
    };

    let result = state.respond_handler().handle(cmd).await?;
    Ok(Json(RespondResponse::from(&result)))
}
