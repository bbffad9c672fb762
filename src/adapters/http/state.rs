//! Shared router state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgres::{
    PostgresChatRepository, PostgresCollaborationRequestRepository, PostgresProjectRepository,
    PostgresUserRepository,
};
use crate::application::{
    CreateProjectHandler, CreateUserHandler, DeleteProjectHandler, GetProjectHandler,
    GetRecommendationsHandler, GetRequestHandler, GetUserHandler, ListMessagesHandler,
    ListProjectsHandler, ListRequestsHandler, PostMessageHandler, RecommendationLimits,
    RespondToRequestHandler, SubmitRequestHandler, UpdateUserHandler,
};
use crate::ports::{
    ChatRepository, CollaborationRequestRepository, ProjectRepository, UserRepository,
};

/// Repositories behind every endpoint.
///
/// Cloned per request; handlers are built on demand from the shared ports.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub requests: Arc<dyn CollaborationRequestRepository>,
    pub chat: Arc<dyn ChatRepository>,
    pub recommendation_limits: RecommendationLimits,
}

impl AppState {
    /// State backed by a process-local store.
    pub fn in_memory(store: &InMemoryStore, limits: RecommendationLimits) -> Self {
        Self {
            users: Arc::new(store.users()),
            projects: Arc::new(store.projects()),
            requests: Arc::new(store.requests()),
            chat: Arc::new(store.chat()),
            recommendation_limits: limits,
        }
    }

    /// State backed by PostgreSQL.
    pub fn postgres(pool: PgPool, limits: RecommendationLimits) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            requests: Arc::new(PostgresCollaborationRequestRepository::new(pool.clone())),
            chat: Arc::new(PostgresChatRepository::new(pool)),
            recommendation_limits: limits,
        }
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone())
    }

    pub fn create_project_handler(&self) -> CreateProjectHandler {
        CreateProjectHandler::new(self.users.clone(), self.projects.clone())
    }

    pub fn get_project_handler(&self) -> GetProjectHandler {
        GetProjectHandler::new(self.projects.clone())
    }

    pub fn list_projects_handler(&self) -> ListProjectsHandler {
        ListProjectsHandler::new(self.projects.clone())
    }

    pub fn delete_project_handler(&self) -> DeleteProjectHandler {
        DeleteProjectHandler::new(self.projects.clone())
    }

    pub fn submit_request_handler(&self) -> SubmitRequestHandler {
        SubmitRequestHandler::new(
            self.users.clone(),
            self.projects.clone(),
            self.requests.clone(),
        )
    }

    pub fn respond_handler(&self) -> RespondToRequestHandler {
        RespondToRequestHandler::new(self.requests.clone())
    }

    pub fn get_request_handler(&self) -> GetRequestHandler {
        GetRequestHandler::new(self.requests.clone())
    }

    pub fn list_requests_handler(&self) -> ListRequestsHandler {
        ListRequestsHandler::new(self.projects.clone(), self.requests.clone())
    }

    pub fn post_message_handler(&self) -> PostMessageHandler {
        PostMessageHandler::new(self.projects.clone(), self.chat.clone())
    }

    pub fn list_messages_handler(&self) -> ListMessagesHandler {
        ListMessagesHandler::new(self.chat.clone())
    }

    pub fn recommendations_handler(&self) -> GetRecommendationsHandler {
        GetRecommendationsHandler::new(
            self.users.clone(),
            self.projects.clone(),
            self.recommendation_limits,
        )
    }
}
