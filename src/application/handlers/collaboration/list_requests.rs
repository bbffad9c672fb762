//! ListRequestsHandler - Requests made to one project.

use std::sync::Arc;

use crate::application::handlers::lookup::require_project;
use crate::domain::collaboration::{CollaborationRequest, RequestStatus};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::{CollaborationRequestRepository, ProjectRepository};

/// Query for a project's requests, oldest first.
#[derive(Debug, Clone)]
pub struct ListRequestsQuery {
    pub project_id: ProjectId,
    /// Only requests in this status, if given.
    pub status: Option<RequestStatus>,
}

pub struct ListRequestsHandler {
    projects: Arc<dyn ProjectRepository>,
    requests: Arc<dyn CollaborationRequestRepository>,
}

impl ListRequestsHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        requests: Arc<dyn CollaborationRequestRepository>,
    ) -> Self {
        Self { projects, requests }
    }

    pub async fn handle(
        &self,
        query: ListRequestsQuery,
    ) -> Result<Vec<CollaborationRequest>, DomainError> {
        require_project(self.projects.as_ref(), &query.project_id).await?;
        self.requests
            .list_by_project(&query.project_id, query.status)
            .await
    }
}
