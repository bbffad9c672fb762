//! HTTP handler for recommendations.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{parse_param, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::GetRecommendationsQuery;
use crate::domain::foundation::UserId;

use super::dto::{RecommendationParams, RecommendationResponse};

/// GET /api/recommendations/:id - Projects matching the user's interests
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<RecommendationParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = parse_param::<UserId>("userId", &id)?;
    let Query(params) = params?;
    let query = GetRecommendationsQuery {
        user_id,
        limit: params.limit,
    };

    let recommendations = state.recommendations_handler().handle(query).await?;
    let response: Vec<RecommendationResponse> = recommendations
        .iter()
        .map(RecommendationResponse::from)
        .collect();
    Ok(Json(response))
}
