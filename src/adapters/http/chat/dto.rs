//! HTTP DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatMessage, MessageCursor};

/// Body of `POST /projects/:id/chat`.
///
/// `senderId` may be omitted when the caller sends `X-User-Id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageBody {
    #[serde(default)]
    pub content: String,
    pub sender_id: Option<String>,
}

/// Query string of `GET /projects/:id/chat`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListMessagesParams {
    pub after: Option<u64>,
    pub limit: Option<usize>,
}

impl From<ListMessagesParams> for MessageCursor {
    fn from(params: ListMessagesParams) -> Self {
        MessageCursor {
            after: params.after,
            limit: params.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub project_id: String,
    pub sender_id: String,
    pub content: String,
    pub sequence: u64,
    pub created_at: String,
}

impl From<&ChatMessage> for MessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id().to_string(),
            project_id: message.project_id().to_string(),
            sender_id: message.sender_id().to_string(),
            content: message.content().to_string(),
            sequence: message.sequence(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}
