//! Response envelope shared by every endpoint except `/health`.
//!
//! Success bodies are `{ success: true, data, message, meta? }`; `meta` is
//! present only on paginated listings. Failures are produced by
//! [`AppError`](crate::error::AppError) with the same shape.

use axum::http::StatusCode;
use axum::Json;
use courtside_core::pagination::PageMeta;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `200 OK` with `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Self::paged(data, None, message)
    }

    /// `200 OK` with `data` and optional pagination metadata.
    pub fn paged(data: T, meta: Option<PageMeta>, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: message.into(),
            meta,
        })
    }

    /// `201 Created` with `data`.
    pub fn created(data: T, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Self::ok(data, message))
    }
}

/// Result of a bulk mutation.
#[derive(Debug, Serialize)]
pub struct BulkResult {
    /// Number of rows changed.
    pub affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::pagination::PageRequest;

    #[test]
    fn meta_is_omitted_when_unpaginated() {
        let Json(body) = ApiResponse::ok(vec![1, 2], "ok");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn meta_is_present_when_paged() {
        let meta = PageMeta::new(3, PageRequest { page: 1, limit: 2 });
        let Json(body) = ApiResponse::paged(vec![1, 2], Some(meta), "ok");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["meta"]["totalPages"], 2);
    }
}
