//! Per-project chat log.
//!
//! Messages are append-only. Each project numbers its messages from 1 so
//! clients can poll with "everything after N".

mod message;

pub use message::{ensure_can_post, ChatMessage, MessageCursor, MessageDraft, MAX_MESSAGE_LENGTH};
