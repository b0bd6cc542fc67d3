//! Read-only public surface (`/user/v1`) plus the public intake forms.
//!
//! Public listings and lookups only ever see active rows.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::status::{ContactStatus, TrialClassStatus};
use courtside_core::types::DbId;
use courtside_db::models::contact::{Contact, CreateContact};
use courtside_db::models::trial_class::{CreateTrialClass, TrialClass};
use courtside_db::repositories::{ContactRepo, TrialClassRepo};
use courtside_db::resource::{CrudRepo, ListFilter, Resource};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::handlers::crud::{ensure_references, list_with};
use crate::query::ListQuery;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /user/v1/{resource}
///
/// `active` in the query string is ignored; only active rows are listed.
pub async fn list<R>(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
    ApiQuery(filter): ApiQuery<R::Filter>,
) -> AppResult<Json<ApiResponse<Vec<R::Row>>>>
where
    R: Resource,
    R::Filter: DeserializeOwned,
{
    let filter = ListFilter {
        columns: R::filters(&filter),
        active: Some(true),
        page: query.page_request(),
    };
    list_with::<R>(&state.pool, filter).await
}

/// GET /user/v1/{resource}/{id}
pub async fn detail<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<R::Row>>> {
    let row = CrudRepo::<R>::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))?;
    Ok(ApiResponse::ok(row, format!("{} retrieved", R::ENTITY)))
}

/// GET /user/v1/{resource}/slug/{slug}
pub async fn by_slug<R: Resource>(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<Json<ApiResponse<R::Row>>> {
    let row = CrudRepo::<R>::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NoneFound { entity: R::ENTITY }))?;
    Ok(ApiResponse::ok(row, format!("{} retrieved", R::ENTITY)))
}

/// POST /user/v1/trial-classes/create
///
/// Public bookings always start as `PENDING`.
pub async fn create_trial_class(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateTrialClass>,
) -> AppResult<(StatusCode, Json<ApiResponse<TrialClass>>)> {
    input.status = Some(TrialClassStatus::Pending);
    ensure_references::<TrialClassRepo>(&state.pool, &TrialClassRepo::create_references(&input))
        .await?;
    let row = CrudRepo::<TrialClassRepo>::create(&state.pool, &input).await?;
    tracing::info!(trial_class_id = row.id, "Trial class booked");
    Ok(ApiResponse::created(row, "Trial class booked"))
}

/// POST /user/v1/contacts/create
///
/// Public inquiries always start as `NEW`.
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateContact>,
) -> AppResult<(StatusCode, Json<ApiResponse<Contact>>)> {
    input.status = Some(ContactStatus::New);
    let row = CrudRepo::<ContactRepo>::create(&state.pool, &input).await?;
    tracing::info!(contact_id = row.id, "Contact inquiry received");
    Ok(ApiResponse::created(row, "Message sent"))
}
