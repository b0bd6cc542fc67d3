//! Trainer model and DTOs.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `trainers`, with the home branch's name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trainer {
    pub id: DbId,
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
    pub trainer_name: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub trainer_image: Option<String>,
    pub trainer_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainer {
    pub branch_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub trainer_name: String,
    #[validate(length(max = 150))]
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub trainer_image: Option<String>,
    pub trainer_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainer {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub branch_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub trainer_name: Option<String>,
    #[validate(length(max = 150))]
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub trainer_image: Option<String>,
    pub trainer_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerFilter {
    pub branch_id: Option<DbId>,
}
