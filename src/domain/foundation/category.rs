//! Category enum: the closed topic taxonomy shared by projects and interests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Topic category from the fixed taxonomy.
///
/// Projects carry exactly one category; users list any number of them as
/// interests. Free-form project tags are plain strings and live outside this
/// enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    ComputerScience,
    Physics,
    Design,
    Business,
    Research,
    Arts,
    Electronics,
    Robotics,
    Ai,
    Chemistry,
    SocialMedia,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 11] = [
        Category::ComputerScience,
        Category::Physics,
        Category::Design,
        Category::Business,
        Category::Research,
        Category::Arts,
        Category::Electronics,
        Category::Robotics,
        Category::Ai,
        Category::Chemistry,
        Category::SocialMedia,
    ];

    /// Human-readable label, also the wire format.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::Physics => "Physics",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Research => "Research",
            Category::Arts => "Arts",
            Category::Electronics => "Electronics",
            Category::Robotics => "Robotics",
            Category::Ai => "AI",
            Category::Chemistry => "Chemistry",
            Category::SocialMedia => "Social Media",
        }
    }

    /// Returns true if a free-form tag names this category.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.trim().eq_ignore_ascii_case(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.matches_tag(trimmed))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "category",
                    format!("'{}' is not a known category", trimmed),
                )
            })
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
