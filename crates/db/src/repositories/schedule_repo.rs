//! Repository for the `schedules` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{CreateSchedule, Schedule, ScheduleFilter, UpdateSchedule};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct ScheduleRepo;

#[async_trait]
impl Resource for ScheduleRepo {
    const ENTITY: &'static str = "Schedule";
    const TABLE: &'static str = "schedules";
    const COLUMNS: &'static str = "schedules.id, schedules.program_id, programs.program_name, \
        schedules.trainer_id, trainers.trainer_name, schedules.court_id, courts.court_name, \
        schedules.day_of_week, schedules.start_time, schedules.end_time, \
        schedules.schedule_status, schedules.created_at, schedules.updated_at";
    const JOINS: &'static str = "LEFT JOIN programs ON programs.id = schedules.program_id \
        LEFT JOIN trainers ON trainers.id = schedules.trainer_id \
        LEFT JOIN courts ON courts.id = schedules.court_id";
    /// e.g. `3 09:00-10:30`
    const LABEL_COLUMN: &'static str = "schedules.day_of_week || ' ' \
        || to_char(schedules.start_time, 'HH24:MI') || '-' \
        || to_char(schedules.end_time, 'HH24:MI')";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("schedule_status");

    type Row = Schedule;
    type Create = CreateSchedule;
    type Update = UpdateSchedule;
    type Filter = ScheduleFilter;

    fn filters(filter: &ScheduleFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("schedules.program_id", filter.program_id)
            .eq("schedules.trainer_id", filter.trainer_id)
            .eq("schedules.court_id", filter.court_id)
            .eq("schedules.day_of_week", filter.day_of_week)
            .into_vec()
    }

    fn create_references(input: &CreateSchedule) -> Vec<Reference> {
        let mut refs = vec![Reference::new("Program", "programs", input.program_id)];
        refs.extend(Reference::optional("Trainer", "trainers", input.trainer_id));
        refs.extend(Reference::optional("Court", "courts", input.court_id));
        refs
    }

    fn update_references(input: &UpdateSchedule) -> Vec<Reference> {
        [
            Reference::optional("Program", "programs", input.program_id),
            Reference::optional("Trainer", "trainers", input.trainer_id.flatten()),
            Reference::optional("Court", "courts", input.court_id.flatten()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateSchedule) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO schedules
                (program_id, trainer_id, court_id, day_of_week, start_time, end_time,
                 schedule_status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING id",
        )
        .bind(input.program_id)
        .bind(input.trainer_id)
        .bind(input.court_id)
        .bind(input.day_of_week)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.schedule_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateSchedule) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE schedules SET
                program_id = COALESCE($2, program_id),
                trainer_id = CASE WHEN $9 THEN $3 ELSE trainer_id END,
                court_id = CASE WHEN $10 THEN $4 ELSE court_id END,
                day_of_week = COALESCE($5, day_of_week),
                start_time = COALESCE($6, start_time),
                end_time = COALESCE($7, end_time),
                schedule_status = COALESCE($8, schedule_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.program_id)
        .bind(input.trainer_id.flatten())
        .bind(input.court_id.flatten())
        .bind(input.day_of_week)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.schedule_status)
        .bind(input.trainer_id.is_some())
        .bind(input.court_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
