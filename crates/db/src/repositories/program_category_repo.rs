//! Repository for the `program_categories` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::{CreateProgramCategory, ProgramCategory, UpdateProgramCategory};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct ProgramCategoryRepo;

#[async_trait]
impl Resource for ProgramCategoryRepo {
    const ENTITY: &'static str = "Program category";
    const TABLE: &'static str = "program_categories";
    const COLUMNS: &'static str = "program_categories.id, program_categories.category_name, \
        program_categories.slug, program_categories.description, \
        program_categories.category_status, program_categories.created_at, \
        program_categories.updated_at";
    const LABEL_COLUMN: &'static str = "program_categories.category_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("category_status");
    const SLUG_COLUMN: Option<&'static str> = Some("slug");

    type Row = ProgramCategory;
    type Create = CreateProgramCategory;
    type Update = UpdateProgramCategory;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateProgramCategory) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO program_categories (category_name, slug, description, category_status)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING id",
        )
        .bind(&input.category_name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.category_status)
        .fetch_one(pool)
        .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgramCategory,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE program_categories SET
                category_name = COALESCE($2, category_name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                category_status = COALESCE($5, category_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.category_name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.category_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
