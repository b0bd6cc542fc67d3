//! Court model and DTOs. Courts belong to a branch.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `courts`, with the owning branch's name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Court {
    pub id: DbId,
    pub branch_id: DbId,
    pub branch_name: Option<String>,
    pub court_name: String,
    pub court_type: Option<String>,
    pub court_image: Option<String>,
    pub description: Option<String>,
    pub court_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a court.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourt {
    pub branch_id: DbId,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub court_name: String,
    #[validate(length(max = 50))]
    pub court_type: Option<String>,
    pub court_image: Option<String>,
    pub description: Option<String>,
    pub court_status: Option<bool>,
}

/// DTO for updating a court. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourt {
    pub branch_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub court_name: Option<String>,
    #[validate(length(max = 50))]
    pub court_type: Option<String>,
    pub court_image: Option<String>,
    pub description: Option<String>,
    pub court_status: Option<bool>,
}

/// Query filters for `GET /courts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourtFilter {
    pub branch_id: Option<DbId>,
    pub court_type: Option<String>,
}
