//! HTTP DTOs for recommendations.

use serde::{Deserialize, Serialize};

use crate::adapters::http::projects::ProjectResponse;
use crate::domain::recommendation::Recommendation;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
}

/// A suggested project. `score` is 0 for recency backfill.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub project: ProjectResponse,
    pub score: u32,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            project: ProjectResponse::from(&rec.project),
            score: rec.score,
        }
    }
}
