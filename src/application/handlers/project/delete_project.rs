//! DeleteProjectHandler - Owner-only removal of a project and everything in it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::lookup::require_project;
use crate::domain::foundation::{DomainError, OwnedByUser, ProjectId, UserId};
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct DeleteProjectCommand {
    pub project_id: ProjectId,
    pub requester_id: UserId,
}

pub struct DeleteProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl DeleteProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `Forbidden` unless the requester created the project
    pub async fn handle(&self, cmd: DeleteProjectCommand) -> Result<(), DomainError> {
        let project = require_project(self.projects.as_ref(), &cmd.project_id).await?;
        if let Err(e) = project.check_ownership(&cmd.requester_id) {
            warn!(
                project_id = %cmd.project_id,
                requester_id = %cmd.requester_id,
                "project delete refused"
            );
            return Err(e);
        }

        self.projects.delete(&cmd.project_id).await?;

        info!(project_id = %cmd.project_id, "project deleted");
        Ok(())
    }
}
