//! Project repository port.
//!
//! Projects own their membership set, so membership changes go through
//! this port as well.

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::{Project, ProjectFilter};
use async_trait::async_trait;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a new project together with its initial membership.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// List projects matching the filter.
    ///
    /// Ordered by updated_at descending, then created_at descending, then id.
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DomainError>;

    /// Delete a project along with its requests and chat messages.
    ///
    /// Nothing belonging to the project survives, and nothing is removed if
    /// the call fails.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;

    /// Add a member. Idempotent; returns the project as stored afterwards.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add_member(
        &self,
        id: &ProjectId,
        user_id: UserId,
        now: Timestamp,
    ) -> Result<Project, DomainError>;
}
