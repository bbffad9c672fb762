//! Shared in-memory tables.
//!
//! All four repositories share one lock so that operations spanning tables
//! (accepting a request, cascading a delete) happen under a single write
//! guard.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chat::ChatMessage;
use crate::domain::collaboration::CollaborationRequest;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, RequestId, UserId};
use crate::domain::project::Project;
use crate::domain::user::User;

use super::{
    InMemoryChatRepository, InMemoryCollaborationRequestRepository, InMemoryProjectRepository,
    InMemoryUserRepository,
};

#[derive(Debug, Default)]
pub(super) struct Tables {
    pub users: HashMap<UserId, User>,
    pub projects: HashMap<ProjectId, Project>,
    /// Insertion order doubles as creation order.
    pub requests: Vec<CollaborationRequest>,
    pub messages: HashMap<ProjectId, Vec<ChatMessage>>,
}

pub(super) type SharedTables = Arc<RwLock<Tables>>;

/// In-memory backing store for development and tests.
///
/// Cloning is cheap; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: SharedTables,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository::new(self.tables.clone())
    }

    pub fn projects(&self) -> InMemoryProjectRepository {
        InMemoryProjectRepository::new(self.tables.clone())
    }

    pub fn requests(&self) -> InMemoryCollaborationRequestRepository {
        InMemoryCollaborationRequestRepository::new(self.tables.clone())
    }

    pub fn chat(&self) -> InMemoryChatRepository {
        InMemoryChatRepository::new(self.tables.clone())
    }
}

pub(super) fn user_not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, "User not found").with_detail("user_id", id.to_string())
}

pub(super) fn project_not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, "Project not found")
        .with_detail("project_id", id.to_string())
}

pub(super) fn request_not_found(id: &RequestId) -> DomainError {
    DomainError::new(ErrorCode::RequestNotFound, "Collaboration request not found")
        .with_detail("request_id", id.to_string())
}
