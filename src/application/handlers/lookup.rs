//! Load-or-404 helpers shared by handlers.

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, UserId};
use crate::domain::project::Project;
use crate::domain::user::User;
use crate::ports::{ProjectRepository, UserRepository};

pub(crate) async fn require_user(
    users: &dyn UserRepository,
    id: &UserId,
) -> Result<User, DomainError> {
    users.find_by_id(id).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
            .with_detail("user_id", id.to_string())
    })
}

pub(crate) async fn require_project(
    projects: &dyn ProjectRepository,
    id: &ProjectId,
) -> Result<Project, DomainError> {
    projects.find_by_id(id).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::ProjectNotFound, format!("Project not found: {}", id))
            .with_detail("project_id", id.to_string())
    })
}
