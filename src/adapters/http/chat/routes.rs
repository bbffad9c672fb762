//! HTTP routes for chat endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{list_messages, post_message};

/// - `GET /projects/:id/chat?after=&limit=`
/// - `POST /projects/:id/chat` with `{content, senderId}`
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/projects/:id/chat", get(list_messages).post(post_message))
}
