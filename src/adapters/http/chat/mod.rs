//! HTTP adapter for project chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListMessagesParams, MessageResponse, PostMessageBody};
pub use routes::chat_routes;
