//! In-memory adapters.
//!
//! Used when no database is configured, and by the test suites.

mod chat_repository;
mod project_repository;
mod request_repository;
mod store;
mod user_repository;

pub use chat_repository::InMemoryChatRepository;
pub use project_repository::InMemoryProjectRepository;
pub use request_repository::InMemoryCollaborationRequestRepository;
pub use store::InMemoryStore;
pub use user_repository::InMemoryUserRepository;
