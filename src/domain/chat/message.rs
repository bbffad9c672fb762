//! Chat message entity and the draft/cursor types around it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, MessageId, ProjectId, Timestamp, UserId, ValidationError,
};
use crate::domain::project::Project;

/// Longest message body accepted, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// A validated message that has not yet been placed in the log.
///
/// The repository turns a draft into a [`ChatMessage`] by assigning the id,
/// timestamp and the next sequence number for the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    project_id: ProjectId,
    sender_id: UserId,
    content: String,
}

impl MessageDraft {
    /// # Errors
    ///
    /// - `ValidationFailed` if content is blank or longer than
    ///   [`MAX_MESSAGE_LENGTH`] characters
    pub fn new(
        project_id: ProjectId,
        sender_id: UserId,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content").into());
        }
        let len = content.chars().count();
        if len > MAX_MESSAGE_LENGTH {
            return Err(ValidationError::too_long("content", MAX_MESSAGE_LENGTH, len).into());
        }
        Ok(Self {
            project_id,
            sender_id,
            content,
        })
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Place the draft in the log at `sequence`.
    pub fn into_message(self, id: MessageId, sequence: u64, now: Timestamp) -> ChatMessage {
        ChatMessage {
            id,
            project_id: self.project_id,
            sender_id: self.sender_id,
            content: self.content,
            sequence,
            created_at: now,
        }
    }
}

/// An immutable entry in a project's chat log.
///
/// # Invariants
///
/// - `sequence` starts at 1 and increases by one per message within a project
/// - `content` is never blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    project_id: ProjectId,
    sender_id: UserId,
    content: String,
    sequence: u64,
    created_at: Timestamp,
}

impl ChatMessage {
    /// Reconstitute a message from persistence.
    pub fn reconstitute(
        id: MessageId,
        project_id: ProjectId,
        sender_id: UserId,
        content: String,
        sequence: u64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            sender_id,
            content,
            sequence,
            created_at,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Position in a chat log for incremental reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCursor {
    /// Only messages with a sequence strictly greater than this.
    pub after: Option<u64>,
    /// At most this many messages.
    pub limit: Option<usize>,
}

impl MessageCursor {
    /// Cursor returning the whole log.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn after(mut self, sequence: u64) -> Self {
        self.after = Some(sequence);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn admits(&self, message: &ChatMessage) -> bool {
        self.after.map_or(true, |after| message.sequence() > after)
    }

    /// Apply the cursor to messages already in append order.
    pub fn select<'a, I>(&self, messages: I) -> Vec<ChatMessage>
    where
        I: IntoIterator<Item = &'a ChatMessage>,
    {
        let admitted = messages.into_iter().filter(|m| self.admits(m)).cloned();
        match self.limit {
            Some(limit) => admitted.take(limit).collect(),
            None => admitted.collect(),
        }
    }
}

/// Fails with `Forbidden` unless `sender` belongs to `project`.
pub fn ensure_can_post(project: &Project, sender: &UserId) -> Result<(), DomainError> {
    if !project.is_member(sender) {
        return Err(DomainError::new(
            ErrorCode::Forbidden,
            "Only project members may post messages",
        )
        .with_detail("project_id", project.id().to_string())
        .with_detail("sender_id", sender.to_string()));
    }
    Ok(())
}
