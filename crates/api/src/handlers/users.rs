//! Create and update for `/admin/v1/users`.
//!
//! Listing, detail and deletion go through the generic [`crud`](super::crud)
//! handlers; only the write paths differ because passwords must be hashed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::types::DbId;
use courtside_db::models::user::{
    CreateUserRequest, NewUser, UpdateUserRequest, UserChanges, UserResponse,
};
use courtside_db::repositories::UserRepo;
use courtside_db::resource::{CrudRepo, Resource};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::handlers::crud::{ensure_references, find_or_404};
use crate::response::ApiResponse;
use crate::state::AppState;

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// POST /admin/v1/users/create
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let new_user = NewUser {
        role_id: input.role_id,
        full_name: input.full_name,
        email: input.email,
        password_hash: hash(&input.password)?,
        user_status: input.user_status.unwrap_or(true),
    };
    ensure_references::<UserRepo>(&state.pool, &UserRepo::create_references(&new_user)).await?;

    let user = CrudRepo::<UserRepo>::create(&state.pool, &new_user).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(ApiResponse::created(user, "User created"))
}

/// PUT /admin/v1/users/update/{id}
///
/// A supplied `password` is re-hashed; otherwise the stored hash is kept.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    find_or_404::<UserRepo>(&state.pool, id).await?;

    let changes = UserChanges {
        role_id: input.role_id,
        full_name: input.full_name,
        email: input.email,
        password_hash: input.password.as_deref().map(hash).transpose()?,
        user_status: input.user_status,
    };
    ensure_references::<UserRepo>(&state.pool, &UserRepo::update_references(&changes)).await?;

    let user = CrudRepo::<UserRepo>::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    tracing::info!(user_id = id, password_changed = changes.password_hash.is_some(), "User updated");
    Ok(ApiResponse::ok(user, "User updated"))
}
