//! UpdateUserHandler - Command handler for partial profile updates.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::lookup::require_user;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{User, UserPatch};
use crate::ports::UserRepository;

/// Command to merge `patch` into an existing profile.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub patch: UserPatch,
}

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, DomainError> {
        let mut user = require_user(self.users.as_ref(), &cmd.user_id).await?;
        if cmd.patch.is_empty() {
            return Ok(user);
        }

        user.apply_patch(cmd.patch, Timestamp::now())?;
        self.users.update(&user).await?;

        info!(user_id = %user.id(), "user profile updated");
        Ok(user)
    }
}
