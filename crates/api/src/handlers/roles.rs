//! Menu grants of a role: `/admin/v1/roles/{id}/menus`.

use axum::extract::State;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::types::DbId;
use courtside_db::models::access::{ReplaceRoleMenus, RoleMenus};
use courtside_db::repositories::{MenuRepo, RoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::handlers::crud::find_or_404;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /admin/v1/roles/{id}/menus
pub async fn get_menus(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<RoleMenus>>> {
    find_or_404::<RoleRepo>(&state.pool, role_id).await?;
    let menu_ids = MenuRepo::menu_ids_for_role(&state.pool, role_id).await?;
    Ok(ApiResponse::ok(
        RoleMenus { role_id, menu_ids },
        "Role menus retrieved",
    ))
}

/// PUT /admin/v1/roles/{id}/menus
///
/// Replaces every grant of the role. All menu ids must exist; an empty list
/// revokes everything.
pub async fn replace_menus(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<ReplaceRoleMenus>,
) -> AppResult<Json<ApiResponse<RoleMenus>>> {
    find_or_404::<RoleRepo>(&state.pool, role_id).await?;

    let missing = MenuRepo::missing_menu_ids(&state.pool, &input.menu_ids).await?;
    if let Some(&id) = missing.first() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Menu", id }));
    }

    let menu_ids = MenuRepo::replace_role_menus(&state.pool, role_id, &input.menu_ids).await?;
    tracing::info!(role_id, granted = menu_ids.len(), "Role menus replaced");
    Ok(ApiResponse::ok(
        RoleMenus { role_id, menu_ids },
        "Role menus updated",
    ))
}
