//! PostgreSQL implementation of ChatRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::chat::{ChatMessage, MessageCursor, MessageDraft};
use crate::domain::foundation::{DomainError, ErrorCode, MessageId, ProjectId, Timestamp};
use crate::ports::ChatRepository;

use super::rows::{db_error, lock_project, project_not_found, row_to_message};

/// PostgreSQL implementation of ChatRepository.
#[derive(Clone)]
pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn append(
        &self,
        draft: MessageDraft,
        now: Timestamp,
    ) -> Result<ChatMessage, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let project_id = *draft.project_id();
        // The project row lock makes MAX(sequence) + 1 safe.
        if !lock_project(&mut tx, &project_id).await? {
            return Err(project_not_found(&project_id));
        }
        let (next, last_at): (i64, Option<DateTime<Utc>>) = sqlx::query_as(
            r#"
            SELECT COALESCE(MAX(sequence), 0) + 1, MAX(created_at)
            FROM chat_messages
            WHERE project_id = $1
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to compute next sequence"))?;

        let sequence = u64::try_from(next).map_err(|_| {
            DomainError::new(ErrorCode::DatabaseError, "Chat sequence out of range")
        })?;
        let created_at = match last_at {
            Some(last) => now.not_before(Timestamp::from_datetime(last)),
            None => now,
        };
        let message = draft.into_message(MessageId::new(), sequence, created_at);
        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, project_id, sender_id, content, sequence, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(project_id.as_uuid())
        .bind(message.sender_id().as_uuid())
        .bind(message.content())
        .bind(next)
        .bind(message.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to insert message"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(message)
    }

    async fn list(
        &self,
        project_id: &ProjectId,
        cursor: MessageCursor,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1)")
                .bind(project_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to check project existence"))?;
        if !exists {
            return Err(project_not_found(project_id));
        }

        let rows = sqlx::query(
            r#"
            SELECT id, project_id, sender_id, content, sequence, created_at
            FROM chat_messages
            WHERE project_id = $1 AND sequence > $2
            ORDER BY sequence
            LIMIT $3
            "#,
        )
        .bind(project_id.as_uuid())
        .bind(bound_after(&cursor))
        .bind(bound_limit(&cursor))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list messages"))?;

        rows.into_iter().map(row_to_message).collect()
    }
}

/// `sequence > $2` bound. Cursors past `i64::MAX` match nothing, as in memory.
fn bound_after(cursor: &MessageCursor) -> i64 {
    cursor
        .after
        .map_or(0, |after| i64::try_from(after).unwrap_or(i64::MAX))
}

/// `LIMIT $3` bound; `NULL` means no limit.
fn bound_limit(cursor: &MessageCursor) -> Option<i64> {
    cursor
        .limit
        .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX))
}
