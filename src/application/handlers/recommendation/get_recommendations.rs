//! GetRecommendationsHandler - Projects a user might want to join.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::lookup::require_user;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::project::ProjectFilter;
use crate::domain::recommendation::{InterestMatcher, Recommendation};
use crate::ports::{ProjectRepository, UserRepository};

/// Default and ceiling for the number of suggestions returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            default_limit: 6,
            max_limit: 50,
        }
    }
}

impl RecommendationLimits {
    /// The effective limit for a request: default when absent, capped at max.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

pub struct GetRecommendationsHandler {
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
    limits: RecommendationLimits,
}

impl GetRecommendationsHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
        limits: RecommendationLimits,
    ) -> Self {
        Self {
            users,
            projects,
            limits,
        }
    }

    pub async fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<Vec<Recommendation>, DomainError> {
        let user = require_user(self.users.as_ref(), &query.user_id).await?;
        let candidates = self.projects.list(&ProjectFilter::all()).await?;
        let limit = self.limits.resolve(query.limit);

        let recommendations = InterestMatcher::recommend(&user, &candidates, limit);
        debug!(
            user_id = %query.user_id,
            candidates = candidates.len(),
            returned = recommendations.len(),
            "recommendations computed"
        );
        Ok(recommendations)
    }
}
