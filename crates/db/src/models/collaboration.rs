//! Partner / sponsor collaboration model and DTOs.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `collaborations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaboration {
    pub id: DbId,
    pub partner_name: String,
    pub collaboration_logo: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub collaboration_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollaboration {
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub partner_name: String,
    pub collaboration_logo: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub collaboration_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCollaboration {
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub partner_name: Option<String>,
    pub collaboration_logo: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub collaboration_status: Option<bool>,
}
