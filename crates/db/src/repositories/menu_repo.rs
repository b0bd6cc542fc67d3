//! Repository for `menus` and the `role_menus` grant table.

use async_trait::async_trait;
use courtside_core::menu_tree::MenuEntry;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::access::{CreateMenu, Menu, MenuFilter, MenuRow, UpdateMenu};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct MenuRepo;

#[async_trait]
impl Resource for MenuRepo {
    const ENTITY: &'static str = "Menu";
    const TABLE: &'static str = "menus";
    const COLUMNS: &'static str = "menus.id, menus.parent_id, parent.menu_name AS parent_name, \
        menus.label_id, menu_labels.label_name, menus.menu_name, menus.menu_path, \
        menus.menu_icon, menus.menu_order, menus.menu_status, menus.created_at, \
        menus.updated_at";
    const JOINS: &'static str = "LEFT JOIN menus AS parent ON parent.id = menus.parent_id \
        LEFT JOIN menu_labels ON menu_labels.id = menus.label_id";
    const LABEL_COLUMN: &'static str = "menus.menu_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("menu_status");

    type Row = Menu;
    type Create = CreateMenu;
    type Update = UpdateMenu;
    type Filter = MenuFilter;

    fn filters(filter: &MenuFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("menus.parent_id", filter.parent_id)
            .eq("menus.label_id", filter.label_id)
            .into_vec()
    }

    fn create_references(input: &CreateMenu) -> Vec<Reference> {
        [
            Reference::optional("Menu", "menus", input.parent_id),
            Reference::optional("Menu label", "menu_labels", input.label_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn update_references(input: &UpdateMenu) -> Vec<Reference> {
        [
            Reference::optional("Menu", "menus", input.parent_id.flatten()),
            Reference::optional("Menu label", "menu_labels", input.label_id.flatten()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateMenu) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO menus
                (parent_id, label_id, menu_name, menu_path, menu_icon, menu_order, menu_status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, TRUE))
             RETURNING id",
        )
        .bind(input.parent_id)
        .bind(input.label_id)
        .bind(&input.menu_name)
        .bind(&input.menu_path)
        .bind(&input.menu_icon)
        .bind(input.menu_order)
        .bind(input.menu_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateMenu) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE menus SET
                parent_id = CASE WHEN $9 THEN $2 ELSE parent_id END,
                label_id = CASE WHEN $10 THEN $3 ELSE label_id END,
                menu_name = COALESCE($4, menu_name),
                menu_path = COALESCE($5, menu_path),
                menu_icon = COALESCE($6, menu_icon),
                menu_order = COALESCE($7, menu_order),
                menu_status = COALESCE($8, menu_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.parent_id.flatten())
        .bind(input.label_id.flatten())
        .bind(&input.menu_name)
        .bind(&input.menu_path)
        .bind(&input.menu_icon)
        .bind(input.menu_order)
        .bind(input.menu_status)
        .bind(input.parent_id.is_some())
        .bind(input.label_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl MenuRepo {
    /// Active menus granted to `role_id`, joined with their labels.
    pub async fn menus_for_role(pool: &PgPool, role_id: DbId) -> Result<Vec<MenuEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MenuRow>(
            "SELECT m.id, m.parent_id, m.menu_name, m.menu_path, m.menu_icon, m.menu_order,
                    m.label_id, l.label_name
             FROM role_menus rm
             JOIN menus m ON m.id = rm.menu_id
             LEFT JOIN menu_labels l ON l.id = m.label_id AND l.label_status = TRUE
             WHERE rm.role_id = $1 AND m.menu_status = TRUE
             ORDER BY m.menu_order, m.id",
        )
        .bind(role_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(MenuEntry::from).collect())
    }

    /// Ids of every menu granted to `role_id`, ascending.
    pub async fn menu_ids_for_role(pool: &PgPool, role_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT menu_id FROM role_menus WHERE role_id = $1 ORDER BY menu_id")
            .bind(role_id)
            .fetch_all(pool)
            .await
    }

    /// The subset of `menu_ids` with no matching menu row, ascending.
    pub async fn missing_menu_ids(pool: &PgPool, menu_ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT t.id
             FROM UNNEST($1::BIGINT[]) AS t(id)
             WHERE NOT EXISTS (SELECT 1 FROM menus m WHERE m.id = t.id)
             ORDER BY t.id",
        )
        .bind(menu_ids)
        .fetch_all(pool)
        .await
    }

    /// Replace the grants of `role_id` with exactly `menu_ids` in one transaction.
    ///
    /// Duplicate ids are collapsed. Returns the new grant list.
    pub async fn replace_role_menus(
        pool: &PgPool,
        role_id: DbId,
        menu_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM role_menus WHERE role_id = $1")
            .bind(role_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO role_menus (role_id, menu_id)
             SELECT $1, m FROM UNNEST($2::BIGINT[]) AS m
             ON CONFLICT (role_id, menu_id) DO NOTHING",
        )
        .bind(role_id)
        .bind(menu_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Self::menu_ids_for_role(pool, role_id).await
    }
}
