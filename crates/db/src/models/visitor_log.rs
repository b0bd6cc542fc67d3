//! Page-visit log model. Rows are append-only.

use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `visitor_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitorLog {
    pub id: DbId,
    pub page_path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub visited_at: Timestamp,
}

/// Body posted by the public site on each page view.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVisitorLogRequest {
    #[validate(length(min = 1, max = 500, message = "is required (max 500 characters)"))]
    pub page_path: String,
}

/// Insert payload: the posted path plus request metadata.
#[derive(Debug, Clone)]
pub struct NewVisitorLog {
    pub page_path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
