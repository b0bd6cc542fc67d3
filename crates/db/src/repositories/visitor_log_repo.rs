//! Repository for the append-only `visitor_logs` table.

use courtside_core::pagination::PageRequest;
use sqlx::PgPool;

use crate::models::visitor_log::{NewVisitorLog, VisitorLog};

const COLUMNS: &str = "id, page_path, ip_address, user_agent, visited_at";

pub struct VisitorLogRepo;

impl VisitorLogRepo {
    /// Record one page view.
    pub async fn create(pool: &PgPool, input: &NewVisitorLog) -> Result<VisitorLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO visitor_logs (page_path, ip_address, user_agent)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisitorLog>(&query)
            .bind(&input.page_path)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// List visits newest first, optionally one page at a time.
    pub async fn list(
        pool: &PgPool,
        page: Option<PageRequest>,
    ) -> Result<Vec<VisitorLog>, sqlx::Error> {
        match page {
            Some(page) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM visitor_logs ORDER BY id DESC LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, VisitorLog>(&query)
                    .bind(page.limit)
                    .bind(page.offset())
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM visitor_logs ORDER BY id DESC");
                sqlx::query_as::<_, VisitorLog>(&query).fetch_all(pool).await
            }
        }
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM visitor_logs")
            .fetch_one(pool)
            .await
    }
}
