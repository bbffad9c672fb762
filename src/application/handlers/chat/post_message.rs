//! PostMessageHandler - Append a member's message to a project chat.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::lookup::require_project;
use crate::domain::chat::{ensure_can_post, ChatMessage, MessageDraft};
use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::ports::{ChatRepository, ProjectRepository};

#[derive(Debug, Clone)]
pub struct PostMessageCommand {
    pub project_id: ProjectId,
    pub sender_id: UserId,
    pub content: String,
}

pub struct PostMessageHandler {
    projects: Arc<dyn ProjectRepository>,
    chat: Arc<dyn ChatRepository>,
}

impl PostMessageHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, chat: Arc<dyn ChatRepository>) -> Self {
        Self { projects, chat }
    }

    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `Forbidden` if the sender is not a member
    /// - `ValidationFailed` if the content is blank or too long
    pub async fn handle(&self, cmd: PostMessageCommand) -> Result<ChatMessage, DomainError> {
        let project = require_project(self.projects.as_ref(), &cmd.project_id).await?;
        if let Err(e) = ensure_can_post(&project, &cmd.sender_id) {
            warn!(
                project_id = %cmd.project_id,
                sender_id = %cmd.sender_id,
                "chat post by non-member refused"
            );
            return Err(e);
        }

        let draft = MessageDraft::new(cmd.project_id, cmd.sender_id, cmd.content)?;
        let message = self.chat.append(draft, Timestamp::now()).await?;

        debug!(
            project_id = %cmd.project_id,
            sequence = message.sequence(),
            "chat message appended"
        );
        Ok(message)
    }
}
