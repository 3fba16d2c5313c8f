//! User domain entity and related types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::ROLE_USER;

/// Roles every user carries after a create or update
pub fn default_roles() -> BTreeSet<String> {
    BTreeSet::from([ROLE_USER.to_string()])
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: i32,
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(
        email(message = "The email is not a valid email address"),
        length(max = 180, message = "The email can't be longer than 180 characters")
    )]
    pub email: String,
    pub roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Kept in the schema; physical deletes never set it
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Overwrite the mutable profile fields.
    ///
    /// Roles are reset, `updated_at` advances and `deleted_at` is cleared;
    /// `id` and `created_at` are untouched.
    pub fn apply_update(&mut self, email: String, name: String) {
        self.email = email;
        self.name = name;
        self.roles = default_roles();
        self.updated_at = Utc::now();
        self.deleted_at = None;
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(
        email(message = "The email is not a valid email address"),
        length(max = 180, message = "The email can't be longer than 180 characters")
    )]
    pub email: String,
    pub roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Build a user with default roles and both timestamps set to now
    pub fn new(email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            email,
            roles: default_roles(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters accepted by user create and update
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserParams {
    /// User email address
    #[param(example = "prueba@gmail.com")]
    pub email: Option<String>,
    /// User display name
    #[param(example = "jaime")]
    pub name: Option<String>,
}

/// Flat user record returned by the user endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    #[schema(example = "jaime")]
    pub name: String,
    #[schema(example = "prueba@gmail.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Full user object embedded in work entry records
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = Vec<String>, example = json!(["ROLE_USER"]))]
    pub roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDetail {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            roles: user.roles,
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = NewUser::new("prueba@gmail.com".to_string(), "jaime".to_string());

        assert_eq!(user.roles, default_roles());
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let user = NewUser::new("not-an-email".to_string(), "jaime".to_string());
        let errors = user.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_apply_update_keeps_created_at() {
        let created = Utc::now() - chrono::Duration::days(1);
        let mut user = User {
            id: 7,
            name: "jaime".to_string(),
            email: "prueba@gmail.com".to_string(),
            roles: BTreeSet::new(),
            created_at: created,
            updated_at: created,
            deleted_at: Some(created),
        };

        user.apply_update("nuevo@gmail.com".to_string(), "Jaime".to_string());

        assert_eq!(user.created_at, created);
        assert!(user.updated_at > created);
        assert_eq!(user.deleted_at, None);
        assert_eq!(user.roles, default_roles());
        assert_eq!(user.email, "nuevo@gmail.com");
    }
}
