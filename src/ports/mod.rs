//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports; the
//! in-memory and PostgreSQL adapters both implement every port here.

mod chat_repository;
mod collaboration_request_repository;
mod project_repository;
mod user_repository;

pub use chat_repository::ChatRepository;
pub use collaboration_request_repository::CollaborationRequestRepository;
pub use project_repository::ProjectRepository;
pub use user_repository::UserRepository;
