//! User aggregate root and profile value objects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, DomainError, Timestamp, UserId, ValidationError};

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Occupation declared at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Working,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Working => "working",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "working" => Ok(UserRole::Working),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// Registration input for a new user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub company_name: String,
    pub linked_in: String,
    pub profile_picture: Option<String>,
    pub interests: BTreeSet<Category>,
    pub email_verified: bool,
}

/// Partial profile update. `None` leaves a field untouched.
///
/// Email is deliberately absent: it cannot change after registration.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub company_name: Option<String>,
    pub linked_in: Option<String>,
    /// `Some(None)` clears the picture.
    pub profile_picture: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub interests: Option<BTreeSet<Category>>,
}

impl UserPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.company_name.is_none()
            && self.linked_in.is_none()
            && self.profile_picture.is_none()
            && self.role.is_none()
            && self.interests.is_none()
    }
}

/// A registered user.
///
/// # Invariants
///
/// - `email` is non-empty, contains `@`, and never changes
/// - `username` is non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    username: String,
    role: UserRole,
    company_name: String,
    linked_in: String,
    profile_picture: Option<String>,
    interests: BTreeSet<Category>,
    email_verified: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if email or username is missing or malformed
    pub fn register(id: UserId, input: NewUser, now: Timestamp) -> Result<Self, DomainError> {
        let email = Self::validate_email(&input.email)?;
        let username = Self::validate_username(&input.username)?;

        Ok(Self {
            id,
            email,
            username,
            role: input.role,
            company_name: input.company_name.trim().to_string(),
            linked_in: input.linked_in.trim().to_string(),
            profile_picture: normalize_url(input.profile_picture),
            interests: input.interests,
            email_verified: input.email_verified,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a user from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        email: String,
        username: String,
        role: UserRole,
        company_name: String,
        linked_in: String,
        profile_picture: Option<String>,
        interests: BTreeSet<Category>,
        email_verified: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            username,
            role,
            company_name,
            linked_in,
            profile_picture,
            interests,
            email_verified,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn linked_in(&self) -> &str {
        &self.linked_in
    }

    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture.as_deref()
    }

    pub fn interests(&self) -> &BTreeSet<Category> {
        &self.interests
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges the present patch fields into this profile.
    ///
    /// Validation happens before any field is written, so a failed patch
    /// leaves the user untouched.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the new username is blank or too long
    pub fn apply_patch(&mut self, patch: UserPatch, now: Timestamp) -> Result<(), DomainError> {
        let username = patch
            .username
            .as_deref()
            .map(Self::validate_username)
            .transpose()?;

        if let Some(username) = username {
            self.username = username;
        }
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name.trim().to_string();
        }
        if let Some(linked_in) = patch.linked_in {
            self.linked_in = linked_in.trim().to_string();
        }
        if let Some(profile_picture) = patch.profile_picture {
            self.profile_picture = normalize_url(profile_picture);
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }

        self.updated_at = now.not_before(self.updated_at);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_email(email: &str) -> Result<String, ValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(trimmed.to_string())
            }
            _ => Err(ValidationError::invalid_format(
                "email",
                "expected local@domain",
            )),
        }
    }

    fn validate_username(username: &str) -> Result<String, ValidationError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        let len = trimmed.chars().count();
        if len > MAX_USERNAME_LENGTH {
            return Err(ValidationError::too_long("username", MAX_USERNAME_LENGTH, len));
        }
        Ok(trimmed.to_string())
    }
}

fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn new_user() -> NewUser {
        NewUser {
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            role: UserRole::Working,
            company_name: " Analytical Engines ".to_string(),
            linked_in: "https://linkedin.com/in/ada".to_string(),
            profile_picture: Some("  ".to_string()),
            interests: [Category::Ai, Category::Physics].into_iter().collect(),
            email_verified: true,
        }
    }

    fn registered() -> User {
        User::register(UserId::new(), new_user(), Timestamp::now()).unwrap()
    }

    #[test]
    fn register_trims_and_normalizes_fields() {
        let user = registered();
        assert_eq!(user.company_name(), "Analytical Engines");
        assert_eq!(user.profile_picture(), None);
        assert_eq!(user.interests().len(), 2);
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn register_requires_email() {
        let input = NewUser {
            email: "  ".to_string(),
            ..new_user()
        };
        let err = User::register(UserId::new(), input, Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"email".to_string()));
    }

    #[test]
    fn register_rejects_email_without_at_sign() {
        let input = NewUser {
            email: "ada.example.com".to_string(),
            ..new_user()
        };
        assert!(User::register(UserId::new(), input, Timestamp::now()).is_err());
    }

    #[test]
    fn register_requires_username() {
        let input = NewUser {
            username: String::new(),
            ..new_user()
        };
        let err = User::register(UserId::new(), input, Timestamp::now()).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"username".to_string()));
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut user = registered();
        let email = user.email().to_string();
        let patch = UserPatch {
            username: Some("countess".to_string()),
            interests: Some([Category::Design].into_iter().collect()),
            profile_picture: Some(Some("https://img.example/ada.png".to_string())),
            ..Default::default()
        };

        user.apply_patch(patch, Timestamp::now()).unwrap();

        assert_eq!(user.username(), "countess");
        assert_eq!(user.email(), email);
        assert_eq!(user.role(), UserRole::Working);
        assert_eq!(user.profile_picture(), Some("https://img.example/ada.png"));
        assert!(user.interests().contains(&Category::Design));
        assert_eq!(user.interests().len(), 1);
    }

    #[test]
    fn patch_can_clear_profile_picture() {
        let mut user = registered();
        user.apply_patch(
            UserPatch {
                profile_picture: Some(Some("https://img.example/a.png".to_string())),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        user.apply_patch(
            UserPatch {
                profile_picture: Some(None),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(user.profile_picture(), None);
    }

    #[test]
    fn failed_patch_leaves_user_unchanged() {
        let mut user = registered();
        let before = user.clone();
        let patch = UserPatch {
            username: Some("   ".to_string()),
            role: Some(UserRole::Student),
            ..Default::default()
        };

        assert!(user.apply_patch(patch, Timestamp::now()).is_err());
        assert_eq!(user, before);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Working".parse::<UserRole>().unwrap(), UserRole::Working);
        assert!("retired".parse::<UserRole>().is_err());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(UserPatch::default().is_empty());
        assert!(!UserPatch {
            role: Some(UserRole::Student),
            ..Default::default()
        }
        .is_empty());
    }
}
