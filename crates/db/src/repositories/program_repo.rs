//! Repository for the `programs` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::{CreateProgram, Program, ProgramFilter, UpdateProgram};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct ProgramRepo;

#[async_trait]
impl Resource for ProgramRepo {
    const ENTITY: &'static str = "Program";
    const TABLE: &'static str = "programs";
    const COLUMNS: &'static str = "programs.id, programs.category_id, \
        program_categories.category_name, programs.program_name, programs.slug, \
        programs.description, programs.age_min, programs.age_max, programs.key_points, \
        programs.program_image, programs.program_status, programs.created_at, \
        programs.updated_at";
    const JOINS: &'static str =
        "LEFT JOIN program_categories ON program_categories.id = programs.category_id";
    const LABEL_COLUMN: &'static str = "programs.program_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("program_status");
    const SLUG_COLUMN: Option<&'static str> = Some("slug");

    type Row = Program;
    type Create = CreateProgram;
    type Update = UpdateProgram;
    type Filter = ProgramFilter;

    fn filters(filter: &ProgramFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("programs.category_id", filter.category_id)
            .into_vec()
    }

    fn create_references(input: &CreateProgram) -> Vec<Reference> {
        Reference::optional("Program category", "program_categories", input.category_id)
            .into_iter()
            .collect()
    }

    fn update_references(input: &UpdateProgram) -> Vec<Reference> {
        Reference::optional("Program category", "program_categories", input.category_id.flatten())
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateProgram) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO programs
                (category_id, program_name, slug, description, age_min, age_max,
                 key_points, program_image, program_status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{}'::TEXT[]), $8, COALESCE($9, TRUE))
             RETURNING id",
        )
        .bind(input.category_id)
        .bind(&input.program_name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.age_min)
        .bind(input.age_max)
        .bind(&input.key_points)
        .bind(&input.program_image)
        .bind(input.program_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateProgram) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE programs SET
                category_id = CASE WHEN $11 THEN $2 ELSE category_id END,
                program_name = COALESCE($3, program_name),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                age_min = COALESCE($6, age_min),
                age_max = COALESCE($7, age_max),
                key_points = COALESCE($8, key_points),
                program_image = COALESCE($9, program_image),
                program_status = COALESCE($10, program_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.category_id.flatten())
        .bind(&input.program_name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.age_min)
        .bind(input.age_max)
        .bind(&input.key_points)
        .bind(&input.program_image)
        .bind(input.program_status)
        .bind(input.category_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
