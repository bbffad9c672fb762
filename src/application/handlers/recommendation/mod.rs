//! Recommendation query handler.

mod get_recommendations;

pub use get_recommendations::{
    GetRecommendationsHandler, GetRecommendationsQuery, RecommendationLimits,
};
