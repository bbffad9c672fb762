//! HTTP handlers for user endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{parse_param, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::{CreateUserCommand, GetUserQuery, UpdateUserCommand};
use crate::domain::foundation::UserId;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// POST /api/users - Register a user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = CreateUserCommand {
        profile: request.into_new_user()?,
    };

    let user = state.create_user_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/users/:id - Fetch a profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetUserQuery {
        user_id: parse_param::<UserId>("id", &id)?,
    };

    let user = state.get_user_handler().handle(query).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/:id - Edit a profile
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = parse_param::<UserId>("id", &id)?;
    let Json(request) = payload?;
    let cmd = UpdateUserCommand {
        user_id,
        patch: request.into_patch()?,
    };

    let user = state.update_user_handler().handle(cmd).await?;
    Ok(Json(UserResponse::from(&user)))
}
