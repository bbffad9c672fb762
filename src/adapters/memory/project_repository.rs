//! In-memory ProjectRepository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::{recency_order, Project, ProjectFilter};
use crate::ports::ProjectRepository;

use super::store::{project_not_found, SharedTables};

#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    tables: SharedTables,
}

impl InMemoryProjectRepository {
    pub(super) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.projects.insert(*project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(id).cloned())
    }

    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DomainError> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        projects.sort_by(recency_order);
        Ok(projects)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(id).is_none() {
            return Err(project_not_found(id));
        }
        tables.requests.retain(|r| r.project_id() != id);
        tables.messages.remove(id);
        Ok(())
    }

    async fn add_member(
        &self,
        id: &ProjectId,
        user_id: UserId,
        now: Timestamp,
    ) -> Result<Project, DomainError> {
        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .get_mut(id)
            .ok_or_else(|| project_not_found(id))?;
        project.add_member(user_id, now);
        Ok(project.clone())
    }
}
