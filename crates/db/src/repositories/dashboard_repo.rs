//! Aggregate queries behind the admin dashboard.
//!
//! Months and years are bucketed in UTC. Results are sparse; shaping into
//! fixed series happens in `courtside_core::analytics`.

use sqlx::PgPool;

use crate::models::dashboard::{
    BranchMonthRow, DashboardSummary, MonthTotal, PageVisits, StatusTotal, YearTotal,
};

pub struct DashboardRepo;

impl DashboardRepo {
    /// Headline counts across the catalog and intake tables.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM branches WHERE branch_status = TRUE) AS total_branches,
                (SELECT COUNT(*) FROM programs WHERE program_status = TRUE) AS total_programs,
                (SELECT COUNT(*) FROM trainers WHERE trainer_status = TRUE) AS total_trainers,
                (SELECT COUNT(*) FROM trial_classes WHERE status = 'PENDING')
                    AS pending_trial_classes,
                (SELECT COUNT(*) FROM contacts WHERE status = 'NEW') AS new_contacts,
                (SELECT COUNT(*) FROM visitor_logs
                  WHERE date_trunc('month', visited_at AT TIME ZONE 'UTC')
                      = date_trunc('month', NOW() AT TIME ZONE 'UTC'))
                    AS visitors_this_month",
        )
        .fetch_one(pool)
        .await
    }

    /// Visits per month of `year`; months without visits are absent.
    pub async fn visitors_by_month(pool: &PgPool, year: i32) -> Result<Vec<MonthTotal>, sqlx::Error> {
        sqlx::query_as::<_, MonthTotal>(
            "SELECT EXTRACT(MONTH FROM visited_at AT TIME ZONE 'UTC')::INT AS month,
                    COUNT(*) AS total
             FROM visitor_logs
             WHERE EXTRACT(YEAR FROM visited_at AT TIME ZONE 'UTC')::INT = $1
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(year)
        .fetch_all(pool)
        .await
    }

    /// Visits per calendar year, oldest first.
    pub async fn visitors_by_year(pool: &PgPool) -> Result<Vec<YearTotal>, sqlx::Error> {
        sqlx::query_as::<_, YearTotal>(
            "SELECT EXTRACT(YEAR FROM visited_at AT TIME ZONE 'UTC')::INT AS year,
                    COUNT(*) AS total
             FROM visitor_logs
             GROUP BY 1
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await
    }

    /// The `limit` most visited paths, ties broken alphabetically.
    pub async fn top_pages(pool: &PgPool, limit: i64) -> Result<Vec<PageVisits>, sqlx::Error> {
        sqlx::query_as::<_, PageVisits>(
            "SELECT page_path, COUNT(*) AS total
             FROM visitor_logs
             GROUP BY page_path
             ORDER BY total DESC, page_path
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Trial-class bookings of `year` per branch per month, by booking date.
    pub async fn trial_classes_by_branch(
        pool: &PgPool,
        year: i32,
    ) -> Result<Vec<BranchMonthRow>, sqlx::Error> {
        sqlx::query_as::<_, BranchMonthRow>(
            "SELECT tc.branch_id,
                    b.branch_name,
                    EXTRACT(MONTH FROM tc.created_at AT TIME ZONE 'UTC')::INT AS month,
                    COUNT(*) AS total
             FROM trial_classes tc
             LEFT JOIN branches b ON b.id = tc.branch_id
             WHERE EXTRACT(YEAR FROM tc.created_at AT TIME ZONE 'UTC')::INT = $1
             GROUP BY tc.branch_id, b.branch_name, 3
             ORDER BY tc.branch_id, 3",
        )
        .bind(year)
        .fetch_all(pool)
        .await
    }

    /// Number of contacts in each status that has at least one row.
    pub async fn contacts_by_status(pool: &PgPool) -> Result<Vec<StatusTotal>, sqlx::Error> {
        sqlx::query_as::<_, StatusTotal>(
            "SELECT status, COUNT(*) AS total FROM contacts GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}
