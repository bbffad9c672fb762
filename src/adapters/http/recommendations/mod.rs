//! HTTP adapter for project recommendations.

mod dto;
mod handlers;
mod routes;

pub use dto::{RecommendationParams, RecommendationResponse};
pub use routes::recommendation_routes;
