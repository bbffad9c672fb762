//! CreateUserHandler - Command handler for registering users.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Command to register a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub profile: NewUser,
}

/// Handler for registering users.
pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, DomainError> {
        let user = User::register(UserId::new(), cmd.profile, Timestamp::now())?;
        self.users.save(&user).await?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}
