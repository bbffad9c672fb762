//! GetUserHandler - Query handler for a single user.

use std::sync::Arc;

use crate::application::handlers::lookup::require_user;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, DomainError> {
        require_user(self.users.as_ref(), &query.user_id).await
    }
}
