//! HTTP handlers for chat endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{parse_param, ApiError};
use crate::adapters::http::extract::ActingUser;
use crate::adapters::http::state::AppState;
use crate::application::{ListMessagesQuery, PostMessageCommand};
use crate::domain::foundation::{DomainError, ProjectId, UserId};

use super::dto::{ListMessagesParams, MessageResponse, PostMessageBody};

/// GET /api/projects/:id/chat - Messages in append order
pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<ListMessagesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = parse_param::<ProjectId>("id", &id)?;
    let Query(params) = params?;
    let query = ListMessagesQuery {
        project_id,
        cursor: params.into(),
    };

    let messages = state.list_messages_handler().handle(query).await?;
    let response: Vec<MessageResponse> = messages.iter().map(MessageResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/projects/:id/chat - Members append a message
pub async fn post_message(
    State(state): State<AppState>,
    acting: Option<ActingUser>,
    Path(id): Path<String>,
    payload: Result<Json<PostMessageBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = parse_param::<ProjectId>("id", &id)?;
    let Json(body) = payload?;

    let sender_id = match (body.sender_id.as_deref(), acting) {
        (Some(raw), _) => parse_param::<UserId>("senderId", raw)?,
        (None, Some(ActingUser(user_id))) => user_id,
        (None, None) => {
            return Err(DomainError::validation("senderId", "senderId is required").into())
        }
    };

    let cmd = PostMessageCommand {
        project_id,
        sender_id,
        content: body.content,
    };

    let message = state.post_message_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(&message))))
}
