//! In-memory ChatRepository.

use async_trait::async_trait;

use crate::domain::chat::{ChatMessage, MessageCursor, MessageDraft};
use crate::domain::foundation::{DomainError, MessageId, ProjectId, Timestamp};
use crate::ports::ChatRepository;

use super::store::{project_not_found, SharedTables};

#[derive(Debug, Clone)]
pub struct InMemoryChatRepository {
    tables: SharedTables,
}

impl InMemoryChatRepository {
    pub(super) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append(
        &self,
        draft: MessageDraft,
        now: Timestamp,
    ) -> Result<ChatMessage, DomainError> {
        let mut tables = self.tables.write().await;
        let project_id = *draft.project_id();
        if !tables.projects.contains_key(&project_id) {
            return Err(project_not_found(&project_id));
        }

        let log = tables.messages.entry(project_id).or_default();
        let (sequence, created_at) = match log.last() {
            Some(last) => (last.sequence() + 1, now.not_before(*last.created_at())),
            None => (1, now),
        };
        let message = draft.into_message(MessageId::new(), sequence, created_at);
        log.push(message.clone());
        Ok(message)
    }

    async fn list(
        &self,
        project_id: &ProjectId,
        cursor: MessageCursor,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let tables = self.tables.read().await;
        if !tables.projects.contains_key(project_id) {
            return Err(project_not_found(project_id));
        }
        Ok(tables
            .messages
            .get(project_id)
            .map(|log| cursor.select(log))
            .unwrap_or_default())
    }
}
