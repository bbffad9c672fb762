//! SubmitRequestHandler - A non-member asks to join a project.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::lookup::{require_project, require_user};
use crate::domain::collaboration::CollaborationRequest;
use crate::domain::foundation::{DomainError, ProjectId, RequestId, Timestamp, UserId};
use crate::ports::{CollaborationRequestRepository, ProjectRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct SubmitRequestCommand {
    pub project_id: ProjectId,
    pub sender_user_id: UserId,
}

pub struct SubmitRequestHandler {
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
    requests: Arc<dyn CollaborationRequestRepository>,
}

impl SubmitRequestHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
        requests: Arc<dyn CollaborationRequestRepository>,
    ) -> Self {
        Self {
            users,
            projects,
            requests,
        }
    }

    /// # Errors
    ///
    /// - `ProjectNotFound` / `UserNotFound` for unknown ids
    /// - `AlreadyMember` if the sender is in the project
    /// - `DuplicatePendingRequest` if the sender already has an open request
    pub async fn handle(
        &self,
        cmd: SubmitRequestCommand,
    ) -> Result<CollaborationRequest, DomainError> {
        let project = require_project(self.projects.as_ref(), &cmd.project_id).await?;
        require_user(self.users.as_ref(), &cmd.sender_user_id).await?;

        let request = CollaborationRequest::submit(
            RequestId::new(),
            &project,
            cmd.sender_user_id,
            Timestamp::now(),
        )?;
        // The repository repeats the membership check and enforces the
        // one-pending-request rule atomically.
        if let Err(e) = self.requests.submit(&request).await {
            warn!(
                project_id = %cmd.project_id,
                sender_user_id = %cmd.sender_user_id,
                code = %e.code,
                "collaboration request refused"
            );
            return Err(e);
        }

        info!(
            request_id = %request.id(),
            project_id = %cmd.project_id,
            sender_user_id = %cmd.sender_user_id,
            "collaboration request submitted"
        );
        Ok(request)
    }
}
