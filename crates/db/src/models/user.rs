//! User entity model and DTOs.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub role_id: DbId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub user_status: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub role_id: DbId,
    /// Resolved role name (e.g. `"admin"`).
    pub role_name: Option<String>,
    pub full_name: String,
    pub email: String,
    pub user_status: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub role_id: DbId,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub full_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    pub user_status: Option<bool>,
}

/// Request body for updating a user. A supplied `password` replaces the old one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub role_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: Option<String>,
    pub user_status: Option<bool>,
}

/// Insert payload with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub role_id: DbId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub user_status: bool,
}

/// Partial update with an optional, already hashed, replacement password.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub role_id: Option<DbId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub user_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub role_id: Option<DbId>,
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected() {
        let input = CreateUserRequest {
            role_id: 1,
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "short".into(),
            user_status: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn update_without_password_is_valid() {
        let input = UpdateUserRequest {
            full_name: Some("Ada L".into()),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
