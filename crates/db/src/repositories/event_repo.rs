//! Repository for the `events` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EventFilter, UpdateEvent};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct EventRepo;

#[async_trait]
impl Resource for EventRepo {
    const ENTITY: &'static str = "Event";
    const TABLE: &'static str = "events";
    const COLUMNS: &'static str = "events.id, events.branch_id, branches.branch_name, \
        events.event_title, events.slug, events.description, events.event_date, \
        events.event_image, events.event_status, events.created_at, events.updated_at";
    const JOINS: &'static str = "LEFT JOIN branches ON branches.id = events.branch_id";
    const LABEL_COLUMN: &'static str = "events.event_title";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("event_status");
    const SLUG_COLUMN: Option<&'static str> = Some("slug");

    type Row = Event;
    type Create = CreateEvent;
    type Update = UpdateEvent;
    type Filter = EventFilter;

    fn filters(filter: &EventFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("events.branch_id", filter.branch_id)
            .into_vec()
    }

    fn create_references(input: &CreateEvent) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id)
            .into_iter()
            .collect()
    }

    fn update_references(input: &UpdateEvent) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id.flatten())
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateEvent) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO events
                (branch_id, event_title, slug, description, event_date, event_image,
                 event_status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING id",
        )
        .bind(input.branch_id)
        .bind(&input.event_title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(&input.event_image)
        .bind(input.event_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateEvent) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET
                branch_id = CASE WHEN $9 THEN $2 ELSE branch_id END,
                event_title = COALESCE($3, event_title),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                event_date = COALESCE($6, event_date),
                event_image = COALESCE($7, event_image),
                event_status = COALESCE($8, event_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.branch_id.flatten())
        .bind(&input.event_title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(&input.event_image)
        .bind(input.event_status)
        .bind(input.branch_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
