//! Recommendation configuration

use serde::Deserialize;

use crate::application::RecommendationLimits;

use super::error::ValidationError;

/// How many projects the recommendation endpoint returns.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommendationConfig {
    /// Used when the request carries no `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound applied to any requested `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl RecommendationConfig {
    pub fn limits(&self) -> RecommendationLimits {
        RecommendationLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ValidationError::InvalidRecommendationLimit);
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize {
    6
}

fn default_max_limit() -> usize {
    50
}
