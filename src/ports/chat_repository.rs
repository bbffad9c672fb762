//! Chat repository port (append-only).

use crate::domain::chat::{ChatMessage, MessageCursor, MessageDraft};
use crate::domain::foundation::{DomainError, ProjectId, Timestamp};
use async_trait::async_trait;

/// Repository port for per-project chat logs.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Append a message, assigning the project's next sequence number.
    ///
    /// Concurrent appends to the same project receive distinct, gap-free
    /// sequence numbers. `created_at` is clamped so it never precedes the
    /// previous message's.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project no longer exists
    /// - `DatabaseError` on persistence failure
    async fn append(&self, draft: MessageDraft, now: Timestamp)
        -> Result<ChatMessage, DomainError>;

    /// Messages in append order, narrowed by the cursor.
    async fn list(
        &self,
        project_id: &ProjectId,
        cursor: MessageCursor,
    ) -> Result<Vec<ChatMessage>, DomainError>;
}
