//! PostgreSQL adapters.
//!
//! Schema lives in `migrations/` at the crate root and is applied with
//! [`MIGRATOR`] when `database.run_migrations` is enabled.

mod chat_repository;
mod project_repository;
mod request_repository;
mod rows;
mod user_repository;

pub use chat_repository::PostgresChatRepository;
pub use project_repository::PostgresProjectRepository;
pub use request_repository::PostgresCollaborationRequestRepository;
pub use user_repository::PostgresUserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
