//! Shared query-string and body types for handlers.

use courtside_core::pagination::PageRequest;
use courtside_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

/// Listing parameters common to every resource (`?page=&limit=&active=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// `true` for active rows only, `false` for deleted rows only.
    pub active: Option<bool>,
}

impl ListQuery {
    pub fn page_request(&self) -> Option<PageRequest> {
        PageRequest::from_params(self.page, self.limit)
    }
}

/// Body of the bulk endpoints: `{ "ids": [..] }`.
#[derive(Debug, Deserialize, Validate)]
pub struct IdsRequest {
    #[validate(length(min = 1, message = "must contain at least one id"))]
    pub ids: Vec<DbId>,
}

/// Body of `PUT /status/{id}`.
#[derive(Debug, Deserialize)]
pub struct StatusRequest<S> {
    pub status: S,
}

/// Body of `POST /update-status-multiple`.
#[derive(Debug, Deserialize)]
pub struct BulkStatusRequest<S> {
    pub ids: Vec<DbId>,
    pub status: S,
}

/// `?year=` for calendar aggregates.
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

/// `?limit=` for top-N aggregates.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}
