//! API error type and the JSON error body shared by every endpoint.

use std::collections::BTreeMap;
use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode, ErrorKind, ValidationError};

/// Error body: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: BTreeMap<String, String>) -> Self {
        if !details.is_empty() {
            self.details = Some(details);
        }
        self
    }
}

/// Domain error on its way out through HTTP.
///
/// Handlers return `Result<_, ApiError>` and use `?` on application calls;
/// the status code is picked here and nowhere else.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// 400 for a malformed path, query, or body value.
    pub fn bad_request(field: &str, reason: impl Display) -> Self {
        Self(DomainError::validation(field, format!("Invalid {}: {}", field, reason)))
    }

    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Conflict | ErrorKind::InvalidState => StatusCode::CONFLICT,
            ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("body", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("query", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request("path", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let DomainError {
            code,
            message,
            details,
        } = self.0;

        let body = if status.is_server_error() {
            error!(code = %code, error = %message, "request failed");
            ErrorResponse::new(ErrorCode::InternalError.to_string(), "Internal server error")
        } else {
            ErrorResponse::new(code.to_string(), message)
                .with_details(details.into_iter().collect())
        };

        (status, Json(body)).into_response()
    }
}

/// Parses a path or query value, answering 400 on failure.
pub fn parse_param<T>(field: &str, raw: &str) -> Result<T, ApiError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| ApiError::bad_request(field, e))
}
