//! PostgreSQL implementation of ProjectRepository.
//!
//! Membership lives in `project_members`; deleting a project cascades to
//! members, requests and chat messages through foreign keys.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::{recency_order, Project, ProjectFilter};
use crate::ports::ProjectRepository;

use super::rows::{
    db_error, fetch_project, insert_member, lock_project, project_not_found, row_to_project,
    PROJECT_SELECT,
};

/// PostgreSQL implementation of ProjectRepository.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let tags: Vec<String> = project.tags().iter().cloned().collect();
        sqlx::query(
            r#"
            INSERT INTO projects (
                id, title, description, category, tags, attachments,
                project_type, created_by, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.title())
        .bind(project.description())
        .bind(project.category().label())
        .bind(tags)
        .bind(project.attachments().to_vec())
        .bind(project.project_type().as_str())
        .bind(project.created_by().as_uuid())
        .bind(project.created_at().as_datetime())
        .bind(project.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to insert project"))?;

        for member in project.members() {
            sqlx::query("INSERT INTO project_members (project_id, user_id) VALUES ($1, $2)")
                .bind(project.id().as_uuid())
                .bind(member.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(db_error("Failed to insert project member"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(db_error("Failed to acquire connection"))?;
        fetch_project(&mut conn, id).await
    }

    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DomainError> {
        // Structured criteria go to SQL; the text query is matched in Rust so
        // that it follows exactly the same rules as every other store.
        let sql = format!(
            r#"{}
            WHERE ($1::uuid IS NULL OR p.created_by = $1)
              AND ($2::text IS NULL OR p.category = $2)
              AND ($3::uuid IS NULL OR EXISTS (
                    SELECT 1 FROM project_members pm
                    WHERE pm.project_id = p.id AND pm.user_id = $3))
            GROUP BY p.id
            ORDER BY p.updated_at DESC, p.created_at DESC, p.id
            "#,
            PROJECT_SELECT
        );
        let rows = sqlx::query(&sql)
            .bind(filter.creator_id.map(|id| *id.as_uuid()))
            .bind(filter.category.map(|c| c.label()))
            .bind(filter.member_id.map(|id| *id.as_uuid()))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list projects"))?;

        let mut projects = rows
            .into_iter()
            .map(row_to_project)
            .collect::<Result<Vec<_>, _>>()?;
        projects.retain(|p| filter.matches(p));
        projects.sort_by(recency_order);
        Ok(projects)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete project"))?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(id));
        }
        Ok(())
    }

    async fn add_member(
        &self,
        id: &ProjectId,
        user_id: UserId,
        now: Timestamp,
    ) -> Result<Project, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        if !lock_project(&mut tx, id).await? {
            return Err(project_not_found(id));
        }
        let mut project = fetch_project(&mut tx, id)
            .await?
            .ok_or_else(|| project_not_found(id))?;

        if project.add_member(user_id, now) {
            insert_member(&mut tx, &project, &user_id).await?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit transaction"))?;
        Ok(project)
    }
}
