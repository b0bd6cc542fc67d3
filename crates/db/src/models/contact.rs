//! Contact inquiry model and DTOs.

use courtside_core::status::ContactStatus;
use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::PHONE_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// One of `NEW`, `IN_PROGRESS`, `DONE`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContact {
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub full_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "is required (max 5000 characters)"))]
    pub message: String,
    /// Defaults to `NEW` if omitted.
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContact {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "must be 1-5000 characters"))]
    pub message: Option<String>,
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
}
