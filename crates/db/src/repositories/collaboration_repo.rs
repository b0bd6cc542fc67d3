//! Repository for the `collaborations` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::collaboration::{Collaboration, CreateCollaboration, UpdateCollaboration};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct CollaborationRepo;

#[async_trait]
impl Resource for CollaborationRepo {
    const ENTITY: &'static str = "Collaboration";
    const TABLE: &'static str = "collaborations";
    const COLUMNS: &'static str = "collaborations.id, collaborations.partner_name, \
        collaborations.collaboration_logo, collaborations.website_url, \
        collaborations.description, collaborations.collaboration_status, \
        collaborations.created_at, collaborations.updated_at";
    const LABEL_COLUMN: &'static str = "collaborations.partner_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("collaboration_status");

    type Row = Collaboration;
    type Create = CreateCollaboration;
    type Update = UpdateCollaboration;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateCollaboration) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO collaborations
                (partner_name, collaboration_logo, website_url, description,
                 collaboration_status)
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE))
             RETURNING id",
        )
        .bind(&input.partner_name)
        .bind(&input.collaboration_logo)
        .bind(&input.website_url)
        .bind(&input.description)
        .bind(input.collaboration_status)
        .fetch_one(pool)
        .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCollaboration,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE collaborations SET
                partner_name = COALESCE($2, partner_name),
                collaboration_logo = COALESCE($3, collaboration_logo),
                website_url = COALESCE($4, website_url),
                description = COALESCE($5, description),
                collaboration_status = COALESCE($6, collaboration_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.partner_name)
        .bind(&input.collaboration_logo)
        .bind(&input.website_url)
        .bind(&input.description)
        .bind(input.collaboration_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
