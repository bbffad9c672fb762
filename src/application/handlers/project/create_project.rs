//! CreateProjectHandler - Command handler for creating projects.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::lookup::require_user;
use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::{NewProject, Project};
use crate::ports::{ProjectRepository, UserRepository};

/// Command to create a project owned by `owner_id`.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub owner_id: UserId,
    pub input: NewProject,
}

/// Handler for creating projects.
///
/// The owner must be a registered user and becomes the first member.
pub struct CreateProjectHandler {
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl CreateProjectHandler {
    pub fn new(users: Arc<dyn UserRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { users, projects }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, DomainError> {
        let project = Project::create(ProjectId::new(), cmd.input, cmd.owner_id, Timestamp::now())?;
        require_user(self.users.as_ref(), &cmd.owner_id).await?;

        self.projects.save(&project).await?;

        info!(
            project_id = %project.id(),
            owner_id = %cmd.owner_id,
            category = %project.category(),
            "project created"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::{Category, ErrorCode};
    use crate::domain::project::ProjectType;

    fn input(title: &str, category: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "Low-cost seismograph".to_string(),
            category: category.to_string(),
            tags: vec!["sensors".to_string(), " ".to_string()],
            attachments: vec!["https://example.com/brief.pdf".to_string()],
            project_type: ProjectType::Solo,
        }
    }

    #[tokio::test]
    async fn owner_becomes_sole_member() {
        let fx = Fixture::new();
        let owner = fx.user("marie", &[]).await;
        let handler = CreateProjectHandler::new(fx.users.clone(), fx.projects.clone());

        let project = handler
            .handle(CreateProjectCommand {
                owner_id: *owner.id(),
                input: input("Quake", "physics"),
            })
            .await
            .unwrap();

        assert_eq!(project.created_by(), owner.id());
        assert_eq!(project.members().len(), 1);
        assert!(project.is_member(owner.id()));
        assert_eq!(project.category(), Category::Physics);
        assert_eq!(project.tags().len(), 1);
        assert!(fx.projects.find_by_id(project.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let fx = Fixture::new();
        let handler = CreateProjectHandler::new(fx.users.clone(), fx.projects.clone());

        let err = handler
            .handle(CreateProjectCommand {
                owner_id: UserId::new(),
                input: input("Quake", "Physics"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected() {
        let fx = Fixture::new();
        let owner = fx.user("marie", &[]).await;
        let handler = CreateProjectHandler::new(fx.users.clone(), fx.projects.clone());

        for bad in [input("   ", "Physics"), input("Quake", "Astrology")] {
            let err = handler
                .handle(CreateProjectCommand {
                    owner_id: *owner.id(),
                    input: bad,
                })
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
    }
}
