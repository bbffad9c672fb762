//! User repository port.
//!
//! Persistence contract for the user directory.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a newly registered user.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Overwrite an existing user's profile.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
