//! HTTP routes for user endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{create_user, get_user, update_user};

/// User routes.
///
/// # Routes
///
/// - `POST /users` - Register a user
/// - `GET /users/:id` - Fetch a profile
/// - `PUT /users/:id` - Edit a profile
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user).put(update_user))
}
