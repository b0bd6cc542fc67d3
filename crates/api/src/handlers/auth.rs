//! Handlers for the `/auth` resource (login, me).

use axum::extract::State;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::menu_tree::{build_menu_tree, MenuNode};
use courtside_core::types::DbId;
use courtside_db::models::user::{LoginRequest, UserResponse};
use courtside_db::repositories::{MenuRepo, RoleRepo, UserRepo};
use courtside_db::resource::CrudRepo;
use courtside_db::DbPool;
use serde::Serialize;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Successful login: token plus everything the console needs to render.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
    pub menus: Vec<MenuNode>,
}

/// Profile of the bearer.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub menus: Vec<MenuNode>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/v1/auth/login
///
/// Authenticate with email + password. A failed attempt leaves `last_login`
/// untouched.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    // 1. Find user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 3. Both the account and its role must be active.
    ensure_active(&state.pool, user.user_status, user.role_id).await?;

    // 4. Record the login, then load the profile with its role name.
    UserRepo::record_login(&state.pool, user.id).await?;
    let profile = load_profile(&state.pool, user.id).await?;

    // 5. Issue the token.
    let role = profile.role_name.clone().unwrap_or_default();
    let token = generate_access_token(profile.id, &role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let menus = menu_tree_for(&state.pool, profile.role_id).await?;
    tracing::info!(user_id = profile.id, role = %role, "User logged in");

    Ok(ApiResponse::ok(
        LoginResponse {
            token,
            expires_in: state.config.jwt.expires_in_secs(),
            user: profile,
            menus,
        },
        "Login successful",
    ))
}

/// GET /admin/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    let user = CrudRepo::<UserRepo>::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    ensure_active(&state.pool, user.user_status, user.role_id).await?;

    let menus = menu_tree_for(&state.pool, user.role_id).await?;
    Ok(ApiResponse::ok(
        ProfileResponse { user, menus },
        "Profile retrieved",
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 403 unless the account is active and its role has not been deleted.
async fn ensure_active(pool: &DbPool, user_status: bool, role_id: DbId) -> AppResult<()> {
    if !user_status {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    if CrudRepo::<RoleRepo>::find_active_by_id(pool, role_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Forbidden("Role is deactivated".into())));
    }
    Ok(())
}

async fn load_profile(pool: &DbPool, user_id: DbId) -> AppResult<UserResponse> {
    CrudRepo::<UserRepo>::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}

async fn menu_tree_for(pool: &DbPool, role_id: DbId) -> AppResult<Vec<MenuNode>> {
    let entries = MenuRepo::menus_for_role(pool, role_id).await?;
    Ok(build_menu_tree(entries))
}
