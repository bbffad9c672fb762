//! HTTP DTOs for project endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::{parse_param, ApiError};
use crate::domain::foundation::{Category, UserId, ValidationError};
use crate::domain::project::{NewProject, Project, ProjectFilter, ProjectType};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /projects`. `createdBy` names the owner; without it the
/// owner comes from `X-User-Id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default, rename = "type")]
    pub project_type: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl CreateProjectRequest {
    pub fn into_new_project(self) -> Result<NewProject, ValidationError> {
        Ok(NewProject {
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags,
            attachments: self.attachments,
            project_type: self
                .project_type
                .as_deref()
                .map(str::parse::<ProjectType>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Query string of `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProjectsParams {
    pub creator: Option<String>,
    pub member: Option<String>,
    pub q: Option<String>,
    pub category: Option<String>,
}

impl ListProjectsParams {
    pub fn into_filter(self) -> Result<ProjectFilter, ApiError> {
        let mut filter = ProjectFilter::all();
        if let Some(q) = self.q {
            filter = filter.with_text(q);
        }
        if let Some(category) = non_blank(self.category) {
            filter = filter.with_category(category.parse::<Category>()?);
        }
        if let Some(creator) = non_blank(self.creator) {
            filter = filter.created_by(parse_param::<UserId>("creator", &creator)?);
        }
        if let Some(member) = non_blank(self.member) {
            filter = filter.with_member(parse_param::<UserId>("member", &member)?);
        }
        Ok(filter)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: &'static str,
    pub tags: Vec<String>,
    pub attachments: Vec<String>,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub created_by: String,
    pub members: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            category: project.category().label(),
            tags: project.tags().iter().cloned().collect(),
            attachments: project.attachments().to_vec(),
            project_type: project.project_type(),
            created_by: project.created_by().to_string(),
            members: project.members().iter().map(UserId::to_string).collect(),
            created_at: project.created_at().to_rfc3339(),
            updated_at: project.updated_at().to_rfc3339(),
        }
    }
}
