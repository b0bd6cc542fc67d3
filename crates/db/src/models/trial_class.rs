//! Trial-class booking model and DTOs.

use chrono::NaiveDate;
use courtside_core::status::TrialClassStatus;
use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::PHONE_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `trial_classes` with branch and program names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrialClass {
    pub id: DbId,
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
    pub program_id: Option<DbId>,
    pub program_name: Option<String>,
    pub participant_name: String,
    pub participant_age: Option<i32>,
    pub guardian_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
    /// One of `PENDING`, `CONFIRMED`, `CANCELLED`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrialClass {
    pub branch_id: Option<DbId>,
    pub program_id: Option<DbId>,
    #[validate(length(min = 1, max = 150, message = "is required (max 150 characters)"))]
    pub participant_name: String,
    #[validate(range(min = 1, max = 120, message = "must be between 1 and 120"))]
    pub participant_age: Option<i32>,
    #[validate(length(max = 150))]
    pub guardian_name: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    /// Defaults to `PENDING` if omitted.
    pub status: Option<TrialClassStatus>,
}

/// `null` for `branch_id` or `program_id` clears the link.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrialClass {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub branch_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub program_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 150, message = "must be 1-150 characters"))]
    pub participant_name: Option<String>,
    #[validate(range(min = 1, max = 120, message = "must be between 1 and 120"))]
    pub participant_age: Option<i32>,
    #[validate(length(max = 150))]
    pub guardian_name: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    pub status: Option<TrialClassStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrialClassFilter {
    pub status: Option<TrialClassStatus>,
    pub branch_id: Option<DbId>,
    pub program_id: Option<DbId>,
}
