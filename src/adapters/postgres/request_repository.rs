//! PostgreSQL implementation of CollaborationRequestRepository.
//!
//! Both writes run in a transaction that first locks the project row, so a
//! submission and an acceptance for the same project never interleave.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::collaboration::{
    ensure_not_member, resolve, CollaborationRequest, Decision, RequestStatus,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, ProjectId, RequestId, Timestamp, UserId,
};
use crate::domain::project::Project;
use crate::ports::CollaborationRequestRepository;

use super::rows::{
    db_error, fetch_project, insert_member, lock_project, project_not_found, row_to_request,
    REQUEST_COLUMNS,
};

/// PostgreSQL implementation of CollaborationRequestRepository.
#[derive(Clone)]
pub struct PostgresCollaborationRequestRepository {
    pool: PgPool,
}

impl PostgresCollaborationRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_pending(request: &CollaborationRequest) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicatePendingRequest,
        "A pending request for this project already exists",
    )
    .with_detail("project_id", request.project_id().to_string())
    .with_detail("sender_user_id", request.sender_user_id().to_string())
}

#[async_trait]
impl CollaborationRequestRepository for PostgresCollaborationRequestRepository {
    async fn submit(&self, request: &CollaborationRequest) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let project_id = request.project_id();
        if !lock_project(&mut tx, project_id).await? {
            return Err(project_not_found(project_id));
        }
        let project = fetch_project(&mut tx, project_id)
            .await?
            .ok_or_else(|| project_not_found(project_id))?;
        ensure_not_member(&project, request.sender_user_id())?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO collaboration_requests (
                id, project_id, sender_user_id, status, created_at, responded_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(project_id.as_uuid())
        .bind(request.sender_user_id().as_uuid())
        .bind(request.status().as_str())
        .bind(request.created_at().as_datetime())
        .bind(request.responded_at().map(|t| *t.as_datetime()))
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            // The partial unique index on pending requests caught a duplicate.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(duplicate_pending(request));
            }
            Err(e) => return Err(DomainError::database("Failed to insert request", e)),
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> Result<Option<CollaborationRequest>, DomainError> {
        let sql = format!(
            "SELECT {} FROM collaboration_requests WHERE id = $1",
            REQUEST_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch request"))?;

        row.map(row_to_request).transpose()
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<CollaborationRequest>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM collaboration_requests
            WHERE project_id = $1 AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at, id
            "#,
            REQUEST_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(project_id.as_uuid())
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list requests"))?;

        rows.into_iter().map(row_to_request).collect()
    }

    async fn respond(
        &self,
        id: &RequestId,
        decision: Decision,
        responder: &UserId,
        now: Timestamp,
    ) -> Result<(CollaborationRequest, Project), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        // Read the project id without a lock, then lock project before
        // request so every writer takes locks in the same order.
        let project_id: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT project_id FROM collaboration_requests WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to fetch request"))?;
        let project_id = match project_id {
            Some((uuid,)) => ProjectId::from_uuid(uuid),
            None => return Err(request_not_found(id)),
        };
        if !lock_project(&mut tx, &project_id).await? {
            // Project deleted since; its requests went with it.
            return Err(request_not_found(id));
        }

        let sql = format!(
            "SELECT {} FROM collaboration_requests WHERE id = $1 FOR UPDATE",
            REQUEST_COLUMNS
        );
        let mut request = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to lock request"))?
            .map(row_to_request)
            .transpose()?
            .ok_or_else(|| request_not_found(id))?;
        let mut project = fetch_project(&mut tx, &project_id)
            .await?
            .ok_or_else(|| project_not_found(&project_id))?;

        let membership_changed = resolve(&mut request, &mut project, decision, responder, now)?;

        let updated = sqlx::query(
            r#"
            UPDATE collaboration_requests
            SET status = $2, responded_at = $3
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.as_uuid())
        .bind(request.status().as_str())
        .bind(now.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to update request"))?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Request is no longer pending",
            )
            .with_detail("request_id", id.to_string()));
        }

        if membership_changed {
            insert_member(&mut tx, &project, request.sender_user_id()).await?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok((request, project))
    }
}

fn request_not_found(id: &RequestId) -> DomainError {
    DomainError::new(
        ErrorCode::RequestNotFound,
        format!("Collaboration request not found: {}", id),
    )
    .with_detail("request_id", id.to_string())
}
