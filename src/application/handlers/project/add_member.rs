//! AddMemberHandler - Idempotent direct membership grant.
//!
//! Accepting a collaboration request adds members through the request
//! repository; this handler covers the direct path.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::lookup::require_user;
use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::Project;
use crate::ports::{ProjectRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    pub project_id: ProjectId,
    pub user_id: UserId,
}

pub struct AddMemberHandler {
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl AddMemberHandler {
    pub fn new(users: Arc<dyn UserRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { users, projects }
    }

    pub async fn handle(&self, cmd: AddMemberCommand) -> Result<Project, DomainError> {
        require_user(self.users.as_ref(), &cmd.user_id).await?;
        let project = self
            .projects
            .add_member(&cmd.project_id, cmd.user_id, Timestamp::now())
            .await?;

        info!(project_id = %cmd.project_id, user_id = %cmd.user_id, "member added");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::{Category, ErrorCode};

    #[tokio::test]
    async fn adding_twice_keeps_one_entry_and_timestamp() {
        let fx = Fixture::new();
        let owner = fx.user("marie", &[]).await;
        let guest = fx.user("pierre", &[]).await;
        let project = fx.project(&owner, "Quake", Category::Physics).await;
        let handler = AddMemberHandler::new(fx.users.clone(), fx.projects.clone());
        let cmd = AddMemberCommand {
            project_id: *project.id(),
            user_id: *guest.id(),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(first.members().len(), 2);
        assert_eq!(first.members(), second.members());
        assert_eq!(first.updated_at(), second.updated_at());
    }

    #[tokio::test]
    async fn owner_re_add_is_a_no_op() {
        let fx = Fixture::new();
        let owner = fx.user("marie", &[]).await;
        let project = fx.project(&owner, "Quake", Category::Physics).await;
        let handler = AddMemberHandler::new(fx.users.clone(), fx.projects.clone());

        let after = handler
            .handle(AddMemberCommand {
                project_id: *project.id(),
                user_id: *owner.id(),
            })
            .await
            .unwrap();
        assert_eq!(after, project);
    }

    #[tokio::test]
    async fn unknown_user_or_project_is_not_found() {
        let fx = Fixture::new();
        let owner = fx.user("marie", &[]).await;
        let project = fx.project(&owner, "Quake", Category::Physics).await;
        let handler = AddMemberHandler::new(fx.users.clone(), fx.projects.clone());

        let err = handler
            .handle(AddMemberCommand {
                project_id: *project.id(),
                user_id: UserId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);

        let err = handler
            .handle(AddMemberCommand {
                project_id: ProjectId::new(),
                user_id: *owner.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }
}
