//! HTTP DTOs for user endpoints.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{Category, ValidationError};
use crate::domain::user::{NewUser, User, UserPatch, UserRole};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub linked_in: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            email: self.email,
            username: self.username,
            role: self
                .role
                .as_deref()
                .map(str::parse::<UserRole>)
                .transpose()?
                .unwrap_or_default(),
            company_name: self.company_name,
            linked_in: self.linked_in,
            profile_picture: self.profile_picture,
            interests: parse_categories(&self.interests)?,
            email_verified: self.email_verified,
        })
    }
}

/// Body of `PUT /users/:id`. Absent fields are left unchanged; an explicit
/// `"profilePicture": null` clears the picture. `email` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub company_name: Option<String>,
    pub linked_in: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub profile_picture: Option<Option<String>>,
    pub role: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> Result<UserPatch, ValidationError> {
        Ok(UserPatch {
            username: self.username,
            company_name: self.company_name,
            linked_in: self.linked_in,
            profile_picture: self.profile_picture,
            role: self.role.as_deref().map(str::parse::<UserRole>).transpose()?,
            interests: self
                .interests
                .as_deref()
                .map(parse_categories)
                .transpose()?,
        })
    }
}

/// Distinguishes `null` from a missing key: a present key is always `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn parse_categories(raw: &[String]) -> Result<BTreeSet<Category>, ValidationError> {
    raw.iter().map(|label| label.parse::<Category>()).collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub company_name: String,
    pub linked_in: String,
    pub profile_picture: Option<String>,
    pub interests: Vec<&'static str>,
    pub email_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            username: user.username().to_string(),
            role: user.role(),
            company_name: user.company_name().to_string(),
            linked_in: user.linked_in().to_string(),
            profile_picture: user.profile_picture().map(str::to_string),
            interests: user.interests().iter().map(Category::label).collect(),
            email_verified: user.email_verified(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}
