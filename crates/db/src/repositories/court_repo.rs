//! Repository for the `courts` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::court::{Court, CourtFilter, CreateCourt, UpdateCourt};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct CourtRepo;

#[async_trait]
impl Resource for CourtRepo {
    const ENTITY: &'static str = "Court";
    const TABLE: &'static str = "courts";
    const COLUMNS: &'static str = "courts.id, courts.branch_id, branches.branch_name, \
        courts.court_name, courts.court_type, courts.court_image, courts.description, \
        courts.court_status, courts.created_at, courts.updated_at";
    const JOINS: &'static str = "LEFT JOIN branches ON branches.id = courts.branch_id";
    const LABEL_COLUMN: &'static str = "courts.court_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("court_status");

    type Row = Court;
    type Create = CreateCourt;
    type Update = UpdateCourt;
    type Filter = CourtFilter;

    fn filters(filter: &CourtFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("courts.branch_id", filter.branch_id)
            .eq("courts.court_type", filter.court_type.clone())
            .into_vec()
    }

    fn create_references(input: &CreateCourt) -> Vec<Reference> {
        vec![Reference::new("Branch", "branches", input.branch_id)]
    }

    fn update_references(input: &UpdateCourt) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id)
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateCourt) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO courts
                (branch_id, court_name, court_type, court_image, description, court_status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING id",
        )
        .bind(input.branch_id)
        .bind(&input.court_name)
        .bind(&input.court_type)
        .bind(&input.court_image)
        .bind(&input.description)
        .bind(input.court_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateCourt) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE courts SET
                branch_id = COALESCE($2, branch_id),
                court_name = COALESCE($3, court_name),
                court_type = COALESCE($4, court_type),
                court_image = COALESCE($5, court_image),
                description = COALESCE($6, description),
                court_status = COALESCE($7, court_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.branch_id)
        .bind(&input.court_name)
        .bind(&input.court_type)
        .bind(&input.court_image)
        .bind(&input.description)
        .bind(input.court_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
