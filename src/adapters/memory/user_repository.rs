//! In-memory UserRepository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::store::{user_not_found, SharedTables};

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    tables: SharedTables,
}

impl InMemoryUserRepository {
    pub(super) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(user_not_found(user.id())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(id).cloned())
    }
}
