//! Ownership trait for user-owned resources.
//!
//! Projects are the only owned aggregate today; the trait keeps the
//! `Forbidden` error shape identical wherever ownership is checked.

use super::{DomainError, ErrorCode, UserId};

/// Trait for aggregates that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning `Forbidden` if the user is not the owner.
    ///
    /// ```ignore
    /// let project = repo.find_by_id(&id).await?.ok_or_else(not_found)?;
    /// project.check_ownership(&requester)?;
    /// ```
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}
