//! Caller identity for endpoints that act on behalf of a user.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::foundation::UserId;

use super::error::ErrorResponse;

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user an owner-only mutation is performed as.
///
/// Identity is trusted from the `X-User-Id` header; there is no session or
/// token verification behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub UserId);

/// Rejection when `X-User-Id` is absent or not a UUID.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new(
            "AUTHENTICATION_REQUIRED",
            "X-User-Id header with a valid user id is required",
        );
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<UserId>().ok())
            .map(ActingUser)
            .ok_or(AuthenticationRequired)
    }
}
