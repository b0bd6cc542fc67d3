//! Repository for the `menu_labels` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::access::{CreateMenuLabel, MenuLabel, UpdateMenuLabel};
use crate::resource::{ColumnFilter, NoFilter, Resource, SoftDelete};

pub struct MenuLabelRepo;

#[async_trait]
impl Resource for MenuLabelRepo {
    const ENTITY: &'static str = "Menu label";
    const TABLE: &'static str = "menu_labels";
    const COLUMNS: &'static str = "menu_labels.id, menu_labels.label_name, \
        menu_labels.label_order, menu_labels.label_status, menu_labels.created_at, \
        menu_labels.updated_at";
    const LABEL_COLUMN: &'static str = "menu_labels.label_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("label_status");

    type Row = MenuLabel;
    type Create = CreateMenuLabel;
    type Update = UpdateMenuLabel;
    type Filter = NoFilter;

    fn filters(_filter: &NoFilter) -> Vec<ColumnFilter> {
        Vec::new()
    }

    async fn insert(pool: &PgPool, input: &CreateMenuLabel) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO menu_labels (label_name, label_order, label_status)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, TRUE))
             RETURNING id",
        )
        .bind(&input.label_name)
        .bind(input.label_order)
        .bind(input.label_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateMenuLabel) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE menu_labels SET
                label_name = COALESCE($2, label_name),
                label_order = COALESCE($3, label_order),
                label_status = COALESCE($4, label_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.label_name)
        .bind(input.label_order)
        .bind(input.label_status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
