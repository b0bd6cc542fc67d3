//! Facility model and DTOs. Facilities belong to a branch.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `facilities`, with the owning branch's name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facility {
    pub id: DbId,
    pub branch_id: DbId,
    pub branch_name: Option<String>,
    pub facility_name: String,
    pub facility_icon: Option<String>,
    pub description: Option<String>,
    pub facility_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFacility {
    pub branch_id: DbId,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub facility_name: String,
    pub facility_icon: Option<String>,
    pub description: Option<String>,
    pub facility_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFacility {
    pub branch_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub facility_name: Option<String>,
    pub facility_icon: Option<String>,
    pub description: Option<String>,
    pub facility_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityFilter {
    pub branch_id: Option<DbId>,
}
