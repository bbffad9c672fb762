//! In-memory CollaborationRequestRepository.

use async_trait::async_trait;

use crate::domain::collaboration::{
    ensure_not_member, resolve, CollaborationRequest, Decision, RequestStatus,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, ProjectId, RequestId, Timestamp, UserId,
};
use crate::domain::project::Project;
use crate::ports::CollaborationRequestRepository;

use super::store::{project_not_found, request_not_found, SharedTables};

#[derive(Debug, Clone)]
pub struct InMemoryCollaborationRequestRepository {
    tables: SharedTables,
}

impl InMemoryCollaborationRequestRepository {
    pub(super) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl CollaborationRequestRepository for InMemoryCollaborationRequestRepository {
    async fn submit(&self, request: &CollaborationRequest) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        let project = tables
            .projects
            .get(request.project_id())
            .ok_or_else(|| project_not_found(request.project_id()))?;
        ensure_not_member(project, request.sender_user_id())?;

        let duplicate = tables.requests.iter().any(|r| {
            r.is_pending()
                && r.project_id() == request.project_id()
                && r.sender_user_id() == request.sender_user_id()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DuplicatePendingRequest,
                "A pending request for this project already exists",
            )
            .with_detail("project_id", request.project_id().to_string())
            .with_detail("sender_user_id", request.sender_user_id().to_string()));
        }

        tables.requests.push(request.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> Result<Option<CollaborationRequest>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.requests.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<CollaborationRequest>, DomainError> {
        let tables = self.tables.read().await;
        let mut requests: Vec<CollaborationRequest> = tables
            .requests
            .iter()
            .filter(|r| r.project_id() == project_id)
            .filter(|r| status.map_or(true, |s| r.status() == s))
            .cloned()
            .collect();
        // Stable sort keeps insertion order among equal timestamps.
        requests.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(requests)
    }

    async fn respond(
        &self,
        id: &RequestId,
        decision: Decision,
        responder: &UserId,
        now: Timestamp,
    ) -> Result<(CollaborationRequest, Project), DomainError> {
        let mut tables = self.tables.write().await;

        let index = tables
            .requests
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| request_not_found(id))?;
        let project_id = *tables.requests[index].project_id();

        // Work on copies and write both back only once the decision succeeds.
        let mut request = tables.requests[index].clone();
        let mut project = tables
            .projects
            .get(&project_id)
            .cloned()
            .ok_or_else(|| project_not_found(&project_id))?;

        resolve(&mut request, &mut project, decision, responder, now)?;

        tables.requests[index] = request.clone();
        tables.projects.insert(project_id, project.clone());
        Ok((request, project))
    }
}
