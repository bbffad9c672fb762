//! Fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::foundation::{Category, ProjectId, Timestamp, UserId};
use crate::domain::project::{NewProject, Project, ProjectType};
use crate::domain::user::{NewUser, User};
use crate::ports::{
    ChatRepository, CollaborationRequestRepository, ProjectRepository, UserRepository,
};

/// In-memory store with trait-object views, as the handlers see it.
pub(crate) struct Fixture {
    pub users: Arc<dyn UserRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub requests: Arc<dyn CollaborationRequestRepository>,
    pub chat: Arc<dyn ChatRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        Self {
            users: Arc::new(store.users()),
            projects: Arc::new(store.projects()),
            requests: Arc::new(store.requests()),
            chat: Arc::new(store.chat()),
        }
    }

    pub async fn user(&self, name: &str, interests: &[Category]) -> User {
        let user = User::register(
            UserId::new(),
            NewUser {
                email: format!("{}@example.com", name),
                username: name.to_string(),
                interests: interests.iter().copied().collect(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        self.users.save(&user).await.unwrap();
        user
    }

    pub async fn project(&self, owner: &User, title: &str, category: Category) -> Project {
        let project = Project::create(
            ProjectId::new(),
            NewProject {
                title: title.to_string(),
                description: format!("{} description", title),
                category: category.label().to_string(),
                tags: vec![],
                attachments: vec![],
                project_type: ProjectType::Combined,
            },
            *owner.id(),
            Timestamp::now(),
        )
        .unwrap();
        self.projects.save(&project).await.unwrap();
        project
    }
}
