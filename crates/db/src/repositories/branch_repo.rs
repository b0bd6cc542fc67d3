//! Repository for the `branches` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::branch::{Branch, CreateBranch, UpdateBranch};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct BranchRepo;

#[async_trait]
impl Resource for BranchRepo {
    const ENTITY: &'static str = "Branch";
    const TABLE: &'static str = "branches";
    const COLUMNS: &'static str = "branches.id, branches.branch_name, branches.slug, \
        branches.address, branches.phone, branches.email, branches.maps_url, \
        branches.branch_image, branches.description, branches.branch_status, \
        branches.created_at, branches.updated_at";
    const LABEL_COLUMN: &'static str = "branches.branch_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("branch_status");
    const SLUG_COLUMN: Option<&'static str> = Some("slug");

    type Row = Branch;
    type Create = CreateBranch;
    type Update = UpdateBranch;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateBranch) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO branches
                (branch_name, slug, address, phone, email, maps_url, branch_image,
                 description, branch_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE))
             RETURNING id",
        )
        .bind(&input.branch_name)
        .bind(&input.slug)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.maps_url)
        .bind(&input.branch_image)
        .bind(&input.description)
        .bind(input.branch_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateBranch) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE branches SET
                branch_name = COALESCE($2, branch_name),
                slug = COALESCE($3, slug),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                maps_url = COALESCE($7, maps_url),
                branch_image = COALESCE($8, branch_image),
                description = COALESCE($9, description),
                branch_status = COALESCE($10, branch_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.branch_name)
        .bind(&input.slug)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.maps_url)
        .bind(&input.branch_image)
        .bind(&input.description)
        .bind(input.branch_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
