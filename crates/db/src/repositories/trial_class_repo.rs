//! Repository for the `trial_classes` table.
//!
//! Trial classes use their `status` column as the soft-delete marker:
//! deleting a booking cancels it.

use async_trait::async_trait;
use courtside_core::status::TrialClassStatus;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::trial_class::{
    CreateTrialClass, TrialClass, TrialClassFilter, UpdateTrialClass,
};
use crate::resource::{ColumnFilter, FilterSet, Reference, Resource, SoftDelete, StatusResource};

pub struct TrialClassRepo;

#[async_trait]
impl Resource for TrialClassRepo {
    const ENTITY: &'static str = "Trial class";
    const TABLE: &'static str = "trial_classes";
    const COLUMNS: &'static str = "trial_classes.id, trial_classes.branch_id, \
        branches.branch_name, trial_classes.program_id, programs.program_name, \
        trial_classes.participant_name, trial_classes.participant_age, \
        trial_classes.guardian_name, trial_classes.phone, trial_classes.email, \
        trial_classes.preferred_date, trial_classes.notes, trial_classes.status, \
        trial_classes.created_at, trial_classes.updated_at";
    const JOINS: &'static str = "LEFT JOIN branches ON branches.id = trial_classes.branch_id \
        LEFT JOIN programs ON programs.id = trial_classes.program_id";
    const LABEL_COLUMN: &'static str = "trial_classes.participant_name";
    const SOFT_DELETE: SoftDelete = SoftDelete::Terminal {
        column: "status",
        value: "CANCELLED",
    };

    type Row = TrialClass;
    type Create = CreateTrialClass;
    type Update = UpdateTrialClass;
    type Filter = TrialClassFilter;

    fn filters(filter: &TrialClassFilter) -> Vec<ColumnFilter> {
        FilterSet::new()
            .eq("trial_classes.status", filter.status.map(TrialClassStatus::as_str))
            .eq("trial_classes.branch_id", filter.branch_id)
            .eq("trial_classes.program_id", filter.program_id)
            .into_vec()
    }

    fn create_references(input: &CreateTrialClass) -> Vec<Reference> {
        [
            Reference::optional("Branch", "branches", input.branch_id),
            Reference::optional("Program", "programs", input.program_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn update_references(input: &UpdateTrialClass) -> Vec<Reference> {
        [
            Reference::optional("Branch", "branches", input.branch_id.flatten()),
            Reference::optional("Program", "programs", input.program_id.flatten()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    async fn insert(pool: &PgPool, input: &CreateTrialClass) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO trial_classes
                (branch_id, program_id, participant_name, participant_age, guardian_name,
                 phone, email, preferred_date, notes, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, 'PENDING'))
             RETURNING id",
        )
        .bind(input.branch_id)
        .bind(input.program_id)
        .bind(&input.participant_name)
        .bind(input.participant_age)
        .bind(&input.guardian_name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.preferred_date)
        .bind(&input.notes)
        .bind(input.status.map(TrialClassStatus::as_str))
        .fetch_one(pool)
        .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrialClass,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trial_classes SET
                branch_id = CASE WHEN $12 THEN $2 ELSE branch_id END,
                program_id = CASE WHEN $13 THEN $3 ELSE program_id END,
                participant_name = COALESCE($4, participant_name),
                participant_age = COALESCE($5, participant_age),
                guardian_name = COALESCE($6, guardian_name),
                phone = COALESCE($7, phone),
                email = COALESCE($8, email),
                preferred_date = COALESCE($9, preferred_date),
                notes = COALESCE($10, notes),
                status = COALESCE($11, status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.branch_id.flatten())
        .bind(input.program_id.flatten())
        .bind(&input.participant_name)
        .bind(input.participant_age)
        .bind(&input.guardian_name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.preferred_date)
        .bind(&input.notes)
        .bind(input.status.map(TrialClassStatus::as_str))
        .bind(input.branch_id.is_some())
        .bind(input.program_id.is_some())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl StatusResource for TrialClassRepo {
    type Status = TrialClassStatus;

    fn status_str(status: TrialClassStatus) -> &'static str {
        status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_delete_cancels() {
        assert_eq!(
            TrialClassRepo::SOFT_DELETE,
            SoftDelete::Terminal {
                column: "status",
                value: TrialClassStatus::TERMINAL.as_str(),
            }
        );
    }

    #[test]
    fn status_filter_binds_wire_value() {
        let filter = TrialClassFilter {
            status: Some(TrialClassStatus::Confirmed),
            ..Default::default()
        };
        assert_eq!(
            TrialClassRepo::filters(&filter),
            vec![ColumnFilter::new("trial_classes.status", "CONFIRMED")]
        );
    }
}
