//! Visitor logging: public intake and admin listing.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use courtside_core::pagination::PageMeta;
use courtside_db::models::visitor_log::{CreateVisitorLogRequest, NewVisitorLog, VisitorLog};
use courtside_db::repositories::VisitorLogRepo;

use crate::error::AppResult;
use crate::extract::{ApiQuery, ValidatedJson};
use crate::query::ListQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Longest user agent kept.
const MAX_USER_AGENT_LEN: usize = 500;

/// First hop of `X-Forwarded-For`, i.e. the original client.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|ua| !ua.is_empty())
        .map(|ua| ua.chars().take(MAX_USER_AGENT_LEN).collect())
}

/// POST /user/v1/visitor-logs/create
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateVisitorLogRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<VisitorLog>>)> {
    let log = VisitorLogRepo::create(
        &state.pool,
        &NewVisitorLog {
            page_path: input.page_path,
            ip_address: client_ip(&headers),
            user_agent: user_agent(&headers),
        },
    )
    .await?;
    Ok(ApiResponse::created(log, "Visit recorded"))
}

/// GET /admin/v1/visitor-logs
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<VisitorLog>>>> {
    let page = query.page_request();
    let logs = VisitorLogRepo::list(&state.pool, page).await?;
    let meta = match page {
        Some(page) => Some(PageMeta::new(
            VisitorLogRepo::count(&state.pool).await?,
            page,
        )),
        None => None,
    };
    Ok(ApiResponse::paged(logs, meta, "Visitor logs retrieved"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn client_ip_takes_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn missing_headers_give_none() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), None);
        assert_eq!(user_agent(&headers), None);
    }

    #[test]
    fn user_agent_is_truncated() {
        let mut headers = HeaderMap::new();
        let long = "a".repeat(MAX_USER_AGENT_LEN + 20);
        headers.insert(
            axum::http::header::USER_AGENT,
            HeaderValue::from_str(&long).unwrap(),
        );
        assert_eq!(user_agent(&headers).unwrap().len(), MAX_USER_AGENT_LEN);
    }
}
