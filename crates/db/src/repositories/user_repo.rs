//! Repository for the `users` table.
//!
//! The generic resource surface works on [`UserResponse`] rows, which never
//! carry the password hash. Authentication goes through [`UserRepo::find_by_email`].

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{NewUser, User, UserChanges, UserFilter, UserResponse};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

/// Column list for the full (credential-bearing) row.
const AUTH_COLUMNS: &str = "id, role_id, full_name, email, password_hash, user_status, \
                            last_login, created_at, updated_at";

pub struct UserRepo;

#[async_trait]
impl Resource for UserRepo {
    const ENTITY: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "users.id, users.role_id, roles.role_name, users.full_name, \
        users.email, users.user_status, users.last_login, users.created_at, users.updated_at";
    const JOINS: &'static str = "LEFT JOIN roles ON roles.id = users.role_id";
    const LABEL_COLUMN: &'static str = "users.full_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("user_status");

    type Row = UserResponse;
    type Create = NewUser;
    type Update = UserChanges;
    type Filter = UserFilter;

    fn filters(filter: &UserFilter) -> Vec<ColumnFilter> {
        FilterSet::new().eq("users.role_id", filter.role_id).into_vec()
    }

    fn create_references(input: &NewUser) -> Vec<Reference> {
        vec![Reference::new("Role", "roles", input.role_id)]
    }

    fn update_references(input: &UserChanges) -> Vec<Reference> {
        Reference::optional("Role", "roles", input.role_id)
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &NewUser) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO users (role_id, full_name, email, password_hash, user_status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.role_id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.user_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UserChanges) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                role_id = COALESCE($2, role_id),
                full_name = COALESCE($3, full_name),
                email = COALESCE($4, email),
                password_hash = COALESCE($5, password_hash),
                user_status = COALESCE($6, user_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.role_id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.user_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl UserRepo {
    /// Find a user with credentials by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {AUTH_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Set `last_login` to now after a successful login.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Total number of user rows, active or not.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
