//! ListMessagesHandler - Read a project's chat log.

use std::sync::Arc;

use crate::domain::chat::{ChatMessage, MessageCursor};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::ChatRepository;

#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    pub project_id: ProjectId,
    pub cursor: MessageCursor,
}

pub struct ListMessagesHandler {
    chat: Arc<dyn ChatRepository>,
}

impl ListMessagesHandler {
    pub fn new(chat: Arc<dyn ChatRepository>) -> Self {
        Self { chat }
    }

    /// Messages in append order. `ProjectNotFound` if the project is gone.
    pub async fn handle(&self, query: ListMessagesQuery) -> Result<Vec<ChatMessage>, DomainError> {
        self.chat.list(&query.project_id, query.cursor).await
    }
}
