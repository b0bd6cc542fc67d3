//! Handlers for `/admin/v1/dashboard`.
//!
//! Aggregates come from [`DashboardRepo`] as sparse rows and are shaped into
//! chart-ready series here. Calendar boundaries are UTC.

use axum::extract::State;
use axum::Json;
use chrono::{Datelike, Utc};
use courtside_core::analytics::{group_by_branch, monthly_series, BranchSeries, MonthlyCount};
use courtside_core::error::CoreError;
use courtside_core::status::ContactStatus;
use courtside_db::models::dashboard::{DashboardSummary, PageVisits, StatusTotal, YearTotal};
use courtside_db::repositories::DashboardRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::query::{LimitQuery, YearQuery};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Default number of rows for `top-pages`.
const DEFAULT_TOP_PAGES: i64 = 10;

/// Upper bound for `top-pages`.
const MAX_TOP_PAGES: i64 = 50;

/// Resolve `?year=`, defaulting to the current UTC year.
fn resolve_year(query: &YearQuery) -> AppResult<i32> {
    match query.year {
        None => Ok(Utc::now().year()),
        Some(year) if (1970..=9999).contains(&year) => Ok(year),
        Some(year) => Err(AppError::Core(CoreError::Validation(format!(
            "year: {year} is out of range"
        )))),
    }
}

/// GET /admin/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardSummary>>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(ApiResponse::ok(summary, "Dashboard summary retrieved"))
}

/// GET /admin/v1/dashboard/visitors?year=YYYY
///
/// Always twelve entries; months without visits report zero.
pub async fn visitors_by_month(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> AppResult<Json<ApiResponse<Vec<MonthlyCount>>>> {
    let year = resolve_year(&query)?;
    let rows = DashboardRepo::visitors_by_month(&state.pool, year).await?;
    let series = monthly_series(rows.into_iter().map(|r| (r.month, r.total)));
    Ok(ApiResponse::ok(series, format!("Visitors for {year} retrieved")))
}

/// GET /admin/v1/dashboard/visitors/yearly
pub async fn visitors_by_year(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<YearTotal>>>> {
    let rows = DashboardRepo::visitors_by_year(&state.pool).await?;
    Ok(ApiResponse::ok(rows, "Yearly visitors retrieved"))
}

/// GET /admin/v1/dashboard/visitors/top-pages?limit=N
pub async fn top_pages(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> AppResult<Json<ApiResponse<Vec<PageVisits>>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_TOP_PAGES)
        .clamp(1, MAX_TOP_PAGES);
    let rows = DashboardRepo::top_pages(&state.pool, limit).await?;
    Ok(ApiResponse::ok(rows, "Top pages retrieved"))
}

/// GET /admin/v1/dashboard/trial-classes?year=YYYY
///
/// One twelve-month series per branch, bucketed by booking creation time.
pub async fn trial_classes_by_branch(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> AppResult<Json<ApiResponse<Vec<BranchSeries>>>> {
    let year = resolve_year(&query)?;
    let rows = DashboardRepo::trial_classes_by_branch(&state.pool, year).await?;
    let series = group_by_branch(rows.into_iter().map(Into::into).collect());
    Ok(ApiResponse::ok(
        series,
        format!("Trial classes for {year} retrieved"),
    ))
}

/// GET /admin/v1/dashboard/contacts/status
///
/// Every status is reported, including those with no contacts.
pub async fn contacts_by_status(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<StatusTotal>>>> {
    let rows = DashboardRepo::contacts_by_status(&state.pool).await?;
    let totals = ContactStatus::ALL
        .iter()
        .map(|status| StatusTotal {
            status: status.as_str().to_string(),
            total: rows
                .iter()
                .filter(|row| row.status == status.as_str())
                .map(|row| row.total)
                .sum(),
        })
        .collect();
    Ok(ApiResponse::ok(totals, "Contacts by status retrieved"))
}
