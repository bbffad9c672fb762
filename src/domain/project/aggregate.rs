//! Project aggregate entity.
//!
//! A project is owned by the user who created it and holds the set of
//! members allowed to chat in it.
//!
//! # Ownership
//!
//! Projects own their `members` set and `attachments` list. Collaboration
//! requests and chat messages reference a project by ID only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Category, DomainError, OwnedByUser, ProjectId, Timestamp, UserId, ValidationError,
};

/// Maximum length for project title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Whether the owner intends to work alone or with collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Solo,
    #[default]
    Combined,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Solo => "solo",
            ProjectType::Combined => "combined",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solo" => Ok(ProjectType::Solo),
            "combined" => Ok(ProjectType::Combined),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown project type '{}'", other),
            )),
        }
    }
}

/// Input for creating a project. The category is still raw text here and is
/// checked against the taxonomy by [`Project::create`].
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub attachments: Vec<String>,
    pub project_type: ProjectType,
}

/// Project aggregate.
///
/// # Invariants
///
/// - `title` is 1-200 characters after trimming
/// - `created_by` never changes and is always in `members`
/// - `members` and `tags` contain no duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    category: Category,
    tags: BTreeSet<String>,
    attachments: Vec<String>,
    project_type: ProjectType,
    created_by: UserId,
    members: BTreeSet<UserId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Project {
    /// Create a new project owned by `owner`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty or too long, or the
    ///   category is not part of the taxonomy
    pub fn create(
        id: ProjectId,
        input: NewProject,
        owner: UserId,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let title = Self::validate_title(&input.title)?;
        let category: Category = input.category.parse()?;

        Ok(Self {
            id,
            title,
            description: input.description.trim().to_string(),
            category,
            tags: normalize_tags(input.tags),
            attachments: input
                .attachments
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            project_type: input.project_type,
            created_by: owner,
            members: BTreeSet::from([owner]),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a project from persistence.
    ///
    /// The owner is re-inserted into `members` so that a damaged row can
    /// never surface a project that violates the ownership invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProjectId,
        title: String,
        description: String,
        category: Category,
        tags: BTreeSet<String>,
        attachments: Vec<String>,
        project_type: ProjectType,
        created_by: UserId,
        mut members: BTreeSet<UserId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        members.insert(created_by);
        Self {
            id,
            title,
            description,
            category,
            tags,
            attachments,
            project_type,
            created_by,
            members,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn members(&self) -> &BTreeSet<UserId> {
        &self.members
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if the user is in the membership set.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a member. Idempotent.
    ///
    /// Returns `true` if the set changed. `updated_at` only moves when it did.
    pub fn add_member(&mut self, user_id: UserId, now: Timestamp) -> bool {
        let inserted = self.members.insert(user_id);
        if inserted {
            self.updated_at = now.not_before(self.updated_at);
        }
        inserted
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<String, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let len = trimmed.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
        }
        Ok(trimmed.to_string())
    }
}

impl OwnedByUser for Project {
    fn owner_id(&self) -> &UserId {
        &self.created_by
    }
}

fn normalize_tags(tags: Vec<String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
