//! Status transitions for resources whose soft-delete marker is a text status
//! (trial classes, contacts).

use axum::extract::State;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::types::DbId;
use courtside_db::resource::{CrudRepo, StatusResource};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::crud::find_or_404;
use crate::query::{BulkStatusRequest, StatusRequest};
use crate::response::{ApiResponse, BulkResult};
use crate::state::AppState;

/// PUT /admin/v1/{resource}/status/{id}
pub async fn set_status<R>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<StatusRequest<R::Status>>,
) -> AppResult<Json<ApiResponse<R::Row>>>
where
    R: StatusResource,
    R::Status: DeserializeOwned,
{
    let affected = CrudRepo::<R>::set_status(&state.pool, &[id], input.status).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }));
    }
    let row = find_or_404::<R>(&state.pool, id).await?;
    tracing::info!(
        entity = R::ENTITY,
        id,
        status = R::status_str(input.status),
        "Status updated"
    );
    Ok(ApiResponse::ok(row, format!("{} status updated", R::ENTITY)))
}

/// POST /admin/v1/{resource}/update-status-multiple
///
/// Updates exactly the ids that exist and reports how many changed.
pub async fn set_status_many<R>(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BulkStatusRequest<R::Status>>,
) -> AppResult<Json<ApiResponse<BulkResult>>>
where
    R: StatusResource,
    R::Status: DeserializeOwned,
{
    if input.ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "ids: must contain at least one id".into(),
        )));
    }
    let affected = CrudRepo::<R>::set_status(&state.pool, &input.ids, input.status).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NoneFound { entity: R::ENTITY }));
    }
    tracing::info!(
        entity = R::ENTITY,
        affected,
        status = R::status_str(input.status),
        "Statuses updated"
    );
    Ok(ApiResponse::ok(
        BulkResult { affected },
        format!("{affected} {} status(es) updated", R::ENTITY),
    ))
}
