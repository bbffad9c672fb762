//! HTTP routes for project endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{create_project, delete_project, get_project, list_projects};

/// Project routes.
///
/// # Routes
///
/// - `POST /projects` - Create (owner = `X-User-Id`)
/// - `GET /projects?creator=&member=&q=&category=` - Search
/// - `GET /projects/:id` - Fetch
/// - `DELETE /projects/:id` - Delete (requester = `X-User-Id`)
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/:id", get(get_project).delete(delete_project))
}
