//! Branch (venue location) model and DTOs.

use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::{PHONE_RE, SLUG_RE};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `branches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Branch {
    pub id: DbId,
    pub branch_name: String,
    pub slug: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub maps_url: Option<String>,
    pub branch_image: Option<String>,
    pub description: Option<String>,
    pub branch_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a branch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBranch {
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub branch_name: String,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub maps_url: Option<String>,
    pub branch_image: Option<String>,
    pub description: Option<String>,
    /// Defaults to `true` if omitted.
    pub branch_status: Option<bool>,
}

/// DTO for updating a branch. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBranch {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub branch_name: Option<String>,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub maps_url: Option<String>,
    pub branch_image: Option<String>,
    pub description: Option<String>,
    pub branch_status: Option<bool>,
}
