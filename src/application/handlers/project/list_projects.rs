//! ListProjectsHandler - Query handler for browsing and searching projects.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::project::{Project, ProjectFilter};
use crate::ports::ProjectRepository;

/// Query listing projects that satisfy every criterion in `filter`.
#[derive(Debug, Clone, Default)]
pub struct ListProjectsQuery {
    pub filter: ProjectFilter,
}

pub struct ListProjectsHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl ListProjectsHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// Most recently updated first.
    pub async fn handle(&self, query: ListProjectsQuery) -> Result<Vec<Project>, DomainError> {
        self.projects.list(&query.filter).await
    }
}
