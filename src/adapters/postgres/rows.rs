//! Row mapping shared by the PostgreSQL repositories.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};
use uuid::Uuid;

use crate::domain::chat::ChatMessage;
use crate::domain::collaboration::{CollaborationRequest, RequestStatus};
use crate::domain::foundation::{
    Category, DomainError, ErrorCode, MessageId, ProjectId, RequestId, Timestamp, UserId,
};
use crate::domain::project::{Project, ProjectType};
use crate::domain::user::{User, UserRole};

/// Columns selected for a project, with its member ids folded into an array.
pub(super) const PROJECT_SELECT: &str = r#"
    SELECT p.id, p.title, p.description, p.category, p.tags, p.attachments,
           p.project_type, p.created_by, p.created_at, p.updated_at,
           COALESCE(array_agg(m.user_id) FILTER (WHERE m.user_id IS NOT NULL), '{}') AS member_ids
    FROM projects p
    LEFT JOIN project_members m ON m.project_id = p.id
"#;

pub(super) const REQUEST_COLUMNS: &str =
    "id, project_id, sender_user_id, status, created_at, responded_at";

pub(super) fn db_error(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(context, e)
}

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}

fn corrupt(what: &str, value: &str) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} in database: {}", what, value),
    )
}

fn timestamp(row: &PgRow, column: &str) -> Result<Timestamp, DomainError> {
    let at: DateTime<Utc> = get(row, column)?;
    Ok(Timestamp::from_datetime(at))
}

pub(super) fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let role: String = get(&row, "role")?;
    let interests: Vec<String> = get(&row, "interests")?;
    let interests = interests
        .iter()
        .map(|label| label.parse::<Category>().map_err(|_| corrupt("interest", label)))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(User::reconstitute(
        UserId::from_uuid(get(&row, "id")?),
        get(&row, "email")?,
        get(&row, "username")?,
        role.parse::<UserRole>().map_err(|_| corrupt("role", &role))?,
        get(&row, "company_name")?,
        get(&row, "linked_in")?,
        get(&row, "profile_picture")?,
        interests,
        get(&row, "email_verified")?,
        timestamp(&row, "created_at")?,
        timestamp(&row, "updated_at")?,
    ))
}

pub(super) fn row_to_project(row: PgRow) -> Result<Project, DomainError> {
    let category: String = get(&row, "category")?;
    let project_type: String = get(&row, "project_type")?;
    let tags: Vec<String> = get(&row, "tags")?;
    let members: Vec<Uuid> = get(&row, "member_ids")?;

    Ok(Project::reconstitute(
        ProjectId::from_uuid(get(&row, "id")?),
        get(&row, "title")?,
        get(&row, "description")?,
        category
            .parse::<Category>()
            .map_err(|_| corrupt("category", &category))?,
        tags.into_iter().collect(),
        get(&row, "attachments")?,
        project_type
            .parse::<ProjectType>()
            .map_err(|_| corrupt("project type", &project_type))?,
        UserId::from_uuid(get(&row, "created_by")?),
        members.into_iter().map(UserId::from_uuid).collect(),
        timestamp(&row, "created_at")?,
        timestamp(&row, "updated_at")?,
    ))
}

pub(super) fn row_to_request(row: PgRow) -> Result<CollaborationRequest, DomainError> {
    let status: String = get(&row, "status")?;
    let responded_at: Option<DateTime<Utc>> = get(&row, "responded_at")?;

    Ok(CollaborationRequest::reconstitute(
        RequestId::from_uuid(get(&row, "id")?),
        ProjectId::from_uuid(get(&row, "project_id")?),
        UserId::from_uuid(get(&row, "sender_user_id")?),
        status
            .parse::<RequestStatus>()
            .map_err(|_| corrupt("request status", &status))?,
        timestamp(&row, "created_at")?,
        responded_at.map(Timestamp::from_datetime),
    ))
}

pub(super) fn row_to_message(row: PgRow) -> Result<ChatMessage, DomainError> {
    let sequence: i64 = get(&row, "sequence")?;

    Ok(ChatMessage::reconstitute(
        MessageId::from_uuid(get(&row, "id")?),
        ProjectId::from_uuid(get(&row, "project_id")?),
        UserId::from_uuid(get(&row, "sender_id")?),
        get(&row, "content")?,
        u64::try_from(sequence).map_err(|_| corrupt("sequence", &sequence.to_string()))?,
        timestamp(&row, "created_at")?,
    ))
}

/// Load one project with its members on an existing connection or transaction.
pub(super) async fn fetch_project(
    conn: &mut PgConnection,
    id: &ProjectId,
) -> Result<Option<Project>, DomainError> {
    let sql = format!("{} WHERE p.id = $1 GROUP BY p.id", PROJECT_SELECT);
    let row = sqlx::query(&sql)
        .bind(id.as_uuid())
        .fetch_optional(conn)
        .await
        .map_err(db_error("Failed to fetch project"))?;

    row.map(row_to_project).transpose()
}

/// Take a row lock on the project, serializing writers that touch it.
///
/// Returns false if the project does not exist.
pub(super) async fn lock_project(
    conn: &mut PgConnection,
    id: &ProjectId,
) -> Result<bool, DomainError> {
    let row = sqlx::query("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
        .bind(id.as_uuid())
        .fetch_optional(conn)
        .await
        .map_err(db_error("Failed to lock project"))?;
    Ok(row.is_some())
}

pub(super) fn project_not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, format!("Project not found: {}", id))
        .with_detail("project_id", id.to_string())
}

/// Persist a membership the aggregate just granted and bump `updated_at`.
///
/// Shared by direct `add_member` and request acceptance; the caller holds
/// the project row lock.
pub(super) async fn insert_member(
    conn: &mut PgConnection,
    project: &Project,
    user_id: &UserId,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO project_members (project_id, user_id) VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(project.id().as_uuid())
    .bind(user_id.as_uuid())
    .execute(&mut *conn)
    .await
    .map_err(db_error("Failed to insert project member"))?;

    sqlx::query("UPDATE projects SET updated_at = $2 WHERE id = $1")
        .bind(project.id().as_uuid())
        .bind(project.updated_at().as_datetime())
        .execute(&mut *conn)
        .await
        .map_err(db_error("Failed to touch project"))?;
    Ok(())
}
