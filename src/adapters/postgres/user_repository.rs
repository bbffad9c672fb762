//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::rows::{db_error, row_to_user};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn interest_labels(user: &User) -> Vec<String> {
    user.interests().iter().map(|c| c.label().to_string()).collect()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, email, username, role, company_name, linked_in,
                profile_picture, interests, email_verified, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email())
        .bind(user.username())
        .bind(user.role().as_str())
        .bind(user.company_name())
        .bind(user.linked_in())
        .bind(user.profile_picture())
        .bind(interest_labels(user))
        .bind(user.email_verified())
        .bind(user.created_at().as_datetime())
        .bind(user.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert user"))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                role = $3,
                company_name = $4,
                linked_in = $5,
                profile_picture = $6,
                interests = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.username())
        .bind(user.role().as_str())
        .bind(user.company_name())
        .bind(user.linked_in())
        .bind(user.profile_picture())
        .bind(interest_labels(user))
        .bind(user.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, username, role, company_name, linked_in,
                   profile_picture, interests, email_verified, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch user"))?;

        row.map(row_to_user).transpose()
    }
}
