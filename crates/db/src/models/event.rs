//! Event (tournaments, open days) model and DTOs.

use chrono::NaiveDate;
use courtside_core::types::{DbId, Timestamp};
use courtside_core::validation::SLUG_RE;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `events`, with the hosting branch's name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
    pub event_title: String,
    pub slug: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_image: Option<String>,
    pub event_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvent {
    pub branch_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "is required (max 200 characters)"))]
    pub event_title: String,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_image: Option<String>,
    pub event_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEvent {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub branch_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub event_title: Option<String>,
    #[validate(regex(path = *SLUG_RE, message = "must be a lowercase, hyphen-separated slug"))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_image: Option<String>,
    pub event_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub branch_id: Option<DbId>,
}
