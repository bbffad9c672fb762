//! Project search filter and listing order.

use std::cmp::Ordering;

use crate::domain::foundation::{Category, UserId};

use super::Project;

/// Criteria for listing projects. Every present criterion must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring over title, description, category and tags.
    pub text_query: Option<String>,
    pub category: Option<Category>,
    pub creator_id: Option<UserId>,
    pub member_id: Option<UserId>,
}

impl ProjectFilter {
    /// Filter matching every project.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.text_query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn created_by(mut self, user_id: UserId) -> Self {
        self.creator_id = Some(user_id);
        self
    }

    pub fn with_member(mut self, user_id: UserId) -> Self {
        self.member_id = Some(user_id);
        self
    }

    /// Returns true if the project satisfies every criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = self.category {
            if project.category() != category {
                return false;
            }
        }
        if let Some(creator) = &self.creator_id {
            if project.created_by() != creator {
                return false;
            }
        }
        if let Some(member) = &self.member_id {
            if !project.is_member(member) {
                return false;
            }
        }
        match self.text_query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => text_matches(project, &query.to_lowercase()),
            _ => true,
        }
    }
}

fn text_matches(project: &Project, needle: &str) -> bool {
    project.title().to_lowercase().contains(needle)
        || project.description().to_lowercase().contains(needle)
        || project.category().label().to_lowercase().contains(needle)
        || project
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Most-recently-updated first; ties by newer creation, then by ID so the
/// order is total.
pub fn recency_order(a: &Project, b: &Project) -> Ordering {
    b.updated_at()
        .cmp(a.updated_at())
        .then_with(|| b.created_at().cmp(a.created_at()))
        .then_with(|| a.id().cmp(b.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProjectId, Timestamp};
    use crate::domain::project::{NewProject, ProjectType};

    fn project(title: &str, category: &str, tags: &[&str], owner: UserId, at: Timestamp) -> Project {
        Project::create(
            ProjectId::new(),
            NewProject {
                title: title.to_string(),
                description: format!("About {}", title),
                category: category.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                attachments: vec![],
                project_type: ProjectType::Combined,
            },
            owner,
            at,
        )
        .unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let p = project("Rover", "Robotics", &[], UserId::new(), Timestamp::now());
        assert!(ProjectFilter::all().matches(&p));
    }

    #[test]
    fn text_query_searches_title_description_category_and_tags() {
        let p = project("Rover", "Robotics", &["Lidar"], UserId::new(), Timestamp::now());

        assert!(ProjectFilter::all().with_text("ROVER").matches(&p));
        assert!(ProjectFilter::all().with_text("about").matches(&p));
        assert!(ProjectFilter::all().with_text("robot").matches(&p));
        assert!(ProjectFilter::all().with_text("lid").matches(&p));
        assert!(!ProjectFilter::all().with_text("quantum").matches(&p));
    }

    #[test]
    fn blank_text_query_is_ignored() {
        let filter = ProjectFilter::all().with_text("   ");
        assert_eq!(filter.text_query, None);
    }

    #[test]
    fn category_creator_and_member_criteria_combine() {
        let owner = UserId::new();
        let mut p = project("Rover", "Robotics", &[], owner, Timestamp::now());
        let guest = UserId::new();
        p.add_member(guest, Timestamp::now());

        assert!(ProjectFilter::all()
            .with_category(Category::Robotics)
            .created_by(owner)
            .with_member(guest)
            .matches(&p));
        assert!(!ProjectFilter::all().with_category(Category::Ai).matches(&p));
        assert!(!ProjectFilter::all().created_by(guest).matches(&p));
        assert!(!ProjectFilter::all().with_member(UserId::new()).matches(&p));
    }

    #[test]
    fn recency_order_puts_latest_update_first() {
        let base = Timestamp::now();
        let old = project("Old", "AI", &[], UserId::new(), base);
        let new = project("New", "AI", &[], UserId::new(), base.plus_secs(30));

        let mut list = vec![old.clone(), new.clone()];
        list.sort_by(recency_order);
        assert_eq!(list[0].id(), new.id());
        assert_eq!(list[1].id(), old.id());
    }
}
