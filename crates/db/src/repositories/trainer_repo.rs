//! Repository for the `trainers` table.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::trainer::{CreateTrainer, Trainer, TrainerFilter, UpdateTrainer};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete};

pub struct TrainerRepo;

#[async_trait]
impl Resource for TrainerRepo {
    const ENTITY: &'static str = "Trainer";
    const TABLE: &'static str = "trainers";
    const COLUMNS: &'static str = "trainers.id, trainers.branch_id, branches.branch_name, \
        trainers.trainer_name, trainers.specialty, trainers.bio, trainers.trainer_image, \
        trainers.trainer_status, trainers.created_at, trainers.updated_at";
    const JOINS: &'static str = "LEFT JOIN branches ON branches.id = trainers.branch_id";
    const LABEL_COLUMN: &'static str = "trainers.trainer_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Flag("trainer_status");

    type Row = Trainer;
    type Create = CreateTrainer;
    type Update = UpdateTrainer;
    type Filter = TrainerFilter;

    fn filters(filter: &TrainerFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("trainers.branch_id", filter.branch_id)
            .into_vec()
    }

    fn create_references(input: &CreateTrainer) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id)
            .into_iter()
            .collect()
    }

    fn update_references(input: &UpdateTrainer) -> Vec<Reference> {
        Reference::optional("Branch", "branches", input.branch_id.flatten())
            .into_iter()
            .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateTrainer) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO trainers
                (branch_id, trainer_name, specialty, bio, trainer_image, trainer_status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING id",
        )
        .bind(input.branch_id)
        .bind(&input.trainer_name)
        .bind(&input.specialty)
        .bind(&input.bio)
        .bind(&input.trainer_image)
        .bind(input.trainer_status)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: DbId, input: &UpdateTrainer) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trainers SET
                branch_id = CASE WHEN $8 THEN $2 ELSE branch_id END,
                trainer_name = COALESCE($3, trainer_name),
                specialty = COALESCE($4, specialty),
                bio = COALESCE($5, bio),
                trainer_image = COALESCE($6, trainer_image),
                trainer_status = COALESCE($7, trainer_status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.branch_id.flatten())
        .bind(&input.trainer_name)
        .bind(&input.specialty)
        .bind(&input.bio)
        .bind(&input.trainer_image)
        .bind(input.trainer_status)
        .bind(input.branch_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
