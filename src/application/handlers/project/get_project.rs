//! GetProjectHandler - Query handler for a single project.

use std::sync::Arc;

use crate::application::handlers::lookup::require_project;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
}

pub struct GetProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, query: GetProjectQuery) -> Result<Project, DomainError> {
        require_project(self.projects.as_ref(), &query.project_id).await
    }
}
