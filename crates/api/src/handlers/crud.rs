//! Generic admin handlers shared by every catalog resource.
//!
//! Each function is instantiated per resource, e.g.
//! `get(crud::list::<BranchRepo>)`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::pagination::PageMeta;
use courtside_core::types::DbId;
use courtside_db::resource::{CrudRepo, ListFilter, Reference, Resource, SelectOption};
use courtside_db::DbPool;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::query::{IdsRequest, ListQuery};
use crate::response::{ApiResponse, BulkResult};
use crate::state::AppState;

/// Fail with 404 naming the first referenced row that does not exist.
pub async fn ensure_references<R: Resource>(
    pool: &DbPool,
    references: &[Reference],
) -> AppResult<()> {
    match CrudRepo::<R>::first_missing(pool, references).await? {
        Some(missing) => Err(AppError::Core(CoreError::NotFound {
            entity: missing.entity,
            id: missing.id,
        })),
        None => Ok(()),
    }
}

/// Fetch a row by id or fail with 404.
pub async fn find_or_404<R: Resource>(pool: &DbPool, id: DbId) -> AppResult<R::Row> {
    CrudRepo::<R>::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))
}

/// GET /admin/v1/{resource}
///
/// Supports the resource's column filters plus `active`, `page` and `limit`.
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
        active: query.active,
        page: query.page_request(),
    };
    list_with::<R>(&state.pool, filter).await
}

/// Run a listing and attach page metadata when paginated.
pub async fn list_with<R: Resource>(
    pool: &DbPool,
    filter: ListFilter,
) -> AppResult<Json<ApiResponse<Vec<R::Row>>>> {
    let rows = CrudRepo::<R>::list(pool, &filter).await?;
    let meta = match filter.page {
        Some(page) => {
            let total = CrudRepo::<R>::count(pool, &filter).await?;
            Some(PageMeta::new(total, page))
        }
        None => None,
    };
    Ok(ApiResponse::paged(
        rows,
        meta,
        format!("{} list retrieved", R::ENTITY),
    ))
}

/// GET /admin/v1/{resource}/for-select
pub async fn for_select<R: Resource>(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<SelectOption>>>> {
    let options = CrudRepo::<R>::for_select(&state.pool).await?;
    Ok(ApiResponse::ok(
        options,
        format!("{} options retrieved", R::ENTITY),
    ))
}

/// GET /admin/v1/{resource}/{id}
pub async fn detail<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<R::Row>>> {
    let row = find_or_404::<R>(&state.pool, id).await?;
    Ok(ApiResponse::ok(row, format!("{} retrieved", R::ENTITY)))
}

/// POST /admin/v1/{resource}/create
pub async fn create<R>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> AppResult<(StatusCode, Json<ApiResponse<R::Row>>)>
where
    R: Resource,
    R::Create: DeserializeOwned + Validate,
{
    ensure_references::<R>(&state.pool, &R::create_references(&input)).await?;
    let row = CrudRepo::<R>::create(&state.pool, &input).await?;
    tracing::info!(entity = R::ENTITY, "Record created");
    Ok(ApiResponse::created(row, format!("{} created", R::ENTITY)))
}

/// PUT /admin/v1/{resource}/update/{id}
pub async fn update<R>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<R::Update>,
) -> AppResult<Json<ApiResponse<R::Row>>>
where
    R: Resource,
    R::Update: DeserializeOwned + Validate,
{
    find_or_404::<R>(&state.pool, id).await?;
    ensure_references::<R>(&state.pool, &R::update_references(&input)).await?;
    let row = CrudRepo::<R>::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))?;
    tracing::info!(entity = R::ENTITY, id, "Record updated");
    Ok(ApiResponse::ok(row, format!("{} updated", R::ENTITY)))
}

/// DELETE /admin/v1/{resource}/delete/{id}
///
/// Soft delete: the row stays fetchable by id.
pub async fn soft_delete<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !CrudRepo::<R>::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }));
    }
    tracing::info!(entity = R::ENTITY, id, "Record soft-deleted");
    Ok(ApiResponse::ok((), format!("{} deleted", R::ENTITY)))
}

/// POST /admin/v1/{resource}/delete-multiple
///
/// Unknown ids are ignored; fails only when none of them exist.
pub async fn soft_delete_many<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<IdsRequest>,
) -> AppResult<Json<ApiResponse<BulkResult>>> {
    let affected = CrudRepo::<R>::soft_delete_many(&state.pool, &input.ids).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NoneFound { entity: R::ENTITY }));
    }
    tracing::info!(entity = R::ENTITY, affected, "Records soft-deleted");
    Ok(ApiResponse::ok(
        BulkResult { affected },
        format!("{affected} {} record(s) deleted", R::ENTITY),
    ))
}
