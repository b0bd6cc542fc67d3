//! Repository for the `roles` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::access::{CreateRole, Role, UpdateRole};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct RoleRepo;

#[async_trait]
impl Resource for RoleRepo {
    const ENTITY: &'static str = "Role";
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static str = "roles.id, roles.role_name, roles.description, \
        roles.role_status, roles.created_at, roles.updated_at";
    const LABEL_COLUMN: &'static str = "roles.role_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("role_status");

    type Row = Role;
    type Create = CreateRole;
    type Update = UpdateRole;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateRole) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO roles (role_name, description, role_status)
             VALUES ($1, $2, COALESCE($3, TRUE))
             RETURNING id",
        )
        .bind(&input.role_name)
        .bind(&input.description)
        .bind(input.role_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateRole) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE roles SET
                role_name = COALESCE($2, role_name),
                description = COALESCE($3, description),
                role_status = COALESCE($4, role_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.role_name)
        .bind(&input.description)
        .bind(input.role_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl RoleRepo {
    /// Find a role id by its unique name.
    pub async fn find_id_by_name(pool: &PgPool, role_name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM roles WHERE role_name = $1")
            .bind(role_name)
            .fetch_optional(pool)
            .await
    }
}
