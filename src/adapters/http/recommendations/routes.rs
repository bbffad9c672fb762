//! HTTP routes for recommendations.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::get_recommendations;

/// - `GET /recommendations/:id?limit=`
pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations/:id", get(get_recommendations))
}
