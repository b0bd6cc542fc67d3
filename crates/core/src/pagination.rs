//! Page/limit pagination for list endpoints.
//!
//! Lists are unpaginated unless the caller supplies `page` or `limit`. When
//! paginated, the response envelope carries a [`PageMeta`].

use serde::Serialize;

/// Default page size when only `page` is supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound for `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Upper bound for `page`; keeps `offset()` within `i64`.
pub const MAX_PAGE: i64 = i64::MAX / MAX_LIMIT;

/// A clamped, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// Returns `None` when neither value is present (unpaginated listing).
    /// `page` is clamped to `1..=MAX_PAGE`, `limit` to `1..=MAX_LIMIT`.
    pub fn from_params(page: Option<i64>, limit: Option<i64>) -> Option<Self> {
        if page.is_none() && limit.is_none() {
            return None;
        }
        Some(Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        })
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata returned alongside a page of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, request: PageRequest) -> Self {
        let total_pages = if total <= 0 {
            0
        } else {
            (total + request.limit - 1) / request.limit
        };
        Self {
            total,
            page: request.page,
            limit: request.limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_means_unpaginated() {
        assert_eq!(PageRequest::from_params(None, None), None);
    }

    #[test]
    fn page_only_uses_default_limit() {
        let req = PageRequest::from_params(Some(3), None).unwrap();
        assert_eq!(req, PageRequest { page: 3, limit: DEFAULT_LIMIT });
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn values_are_clamped() {
        let req = PageRequest::from_params(Some(-4), Some(10_000)).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, MAX_LIMIT);

        let req = PageRequest::from_params(None, Some(0)).unwrap();
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn huge_page_does_not_overflow_offset() {
        let req = PageRequest::from_params(Some(i64::MAX), Some(MAX_LIMIT)).unwrap();
        assert_eq!(req.page, MAX_PAGE);
        assert!(req.offset() >= 0);

        let req = PageRequest::from_params(Some(i64::MAX), Some(10)).unwrap();
        assert_eq!(req.offset(), (MAX_PAGE - 1) * 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        let req = PageRequest { page: 1, limit: 10 };
        assert_eq!(PageMeta::new(0, req).total_pages, 0);
        assert_eq!(PageMeta::new(10, req).total_pages, 1);
        assert_eq!(PageMeta::new(11, req).total_pages, 2);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = PageMeta::new(25, PageRequest { page: 2, limit: 10 });
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 25, "page": 2, "limit": 10, "totalPages": 3})
        );
    }
}
