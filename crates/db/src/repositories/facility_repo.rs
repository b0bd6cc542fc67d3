//! Repository for the `facilities` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::facility::{CreateFacility, Facility, FacilityFilter, UpdateFacility};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct FacilityRepo;

#[async_trait]
impl Resource for FacilityRepo {
    const ENTITY: &'static str = "Facility";
    const TABLE: &'static str = "facilities";
    const COLUMNS: &'static str = "facilities.id, facilities.branch_id, branches.branch_name, \
        facilities.facility_name, facilities.facility_icon, facilities.description, \
        facilities.facility_status, facilities.created_at, facilities.updated_at";
    const JOINS: &'static str = "LEFT JOIN branches ON branches.id = facilities.branch_id";
    const LABEL_COLUMN: &'static str = "facilities.facility_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("facility_status");

    type Row = Facility;
    type Create = CreateFacility;
    type Update = UpdateFacility;
    type Filter = FacilityFilter;

    fn filters(filter: &FacilityFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("facilities.branch_id", filter.branch_id)
            .into_vec()
    }

    fn create_references(input: &CreateFacility) -> Vec<Reference> {
        vec![Reference::new("Branch", "branches", input.branch_id)]
    }

    fn update_references(input: &UpdateFacility) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id)
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateFacility) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO facilities
                (branch_id, facility_name, facility_icon, description, facility_status)
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE))
             RETURNING id",
        )
        .bind(input.branch_id)
        .bind(&input.facility_name)
        .bind(&input.facility_icon)
        .bind(&input.description)
        .bind(input.facility_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateFacility) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE facilities SET
                branch_id = COALESCE($2, branch_id),
                facility_name = COALESCE($3, facility_name),
                facility_icon = COALESCE($4, facility_icon),
                description = COALESCE($5, description),
                facility_status = COALESCE($6, facility_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.branch_id)
        .bind(&input.facility_name)
        .bind(&input.facility_icon)
        .bind(&input.description)
        .bind(input.facility_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
