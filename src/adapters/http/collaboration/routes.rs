//! HTTP routes for collaboration request endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{get_request, list_requests, respond_to_request, submit_request};

/// Collaboration request routes.
///
/// # Routes
///
/// - `GET /projects/:id/requests?status=` - List a project's requests
/// - `POST /projects/:id/requests` - Submit `{senderUserId}`
/// - `GET /requests/:id` - Fetch a request
/// - `POST /requests/:id/respond` - Decide `{decision}` (responder = `X-User-Id`)
pub fn collaboration_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/:id/requests",
            get(list_requests).post(submit_request),
        )
        .route("/requests/:id", get(get_request))
        .route("/requests/:id/respond", post(respond_to_request))
}
