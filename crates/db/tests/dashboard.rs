//! Integration tests for the dashboard aggregate queries.

use courtside_db::repositories::DashboardRepo;
use sqlx::PgPool;

async fn visit(pool: &PgPool, path: &str, at: &str) {
    sqlx::query("INSERT INTO visitor_logs (page_path, visited_at) VALUES ($1, $2::TIMESTAMPTZ)")
        .bind(path)
        .bind(at)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_visitors_grouped_by_month_and_year(pool: PgPool) {
    visit(&pool, "/", "2024-01-15T10:00:00Z").await;
    visit(&pool, "/", "2024-01-20T10:00:00Z").await;
    visit(&pool, "/programs", "2024-03-01T00:00:00Z").await;
    visit(&pool, "/", "2023-12-31T23:59:59Z").await;

    let months = DashboardRepo::visitors_by_month(&pool, 2024).await.unwrap();
    let points: Vec<(i32, i64)> = months.iter().map(|m| (m.month, m.total)).collect();
    assert_eq!(points, vec![(1, 2), (3, 1)]);

    let years = DashboardRepo::visitors_by_year(&pool).await.unwrap();
    let points: Vec<(i32, i64)> = years.iter().map(|y| (y.year, y.total)).collect();
    assert_eq!(points, vec![(2023, 1), (2024, 3)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_top_pages_ordering_and_limit(pool: PgPool) {
    for path in ["/b", "/a", "/a", "/c", "/b", "/a"] {
        visit(&pool, path, "2024-05-05T00:00:00Z").await;
    }
    let pages = DashboardRepo::top_pages(&pool, 2).await.unwrap();
    let pages: Vec<(&str, i64)> = pages.iter().map(|p| (p.page_path.as_str(), p.total)).collect();
    assert_eq!(pages, vec![("/a", 3), ("/b", 2)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_summary_counts(pool: PgPool) {
    sqlx::query("INSERT INTO branches (branch_name, slug) VALUES ('A', 'a'), ('B', 'b')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE branches SET branch_status = FALSE WHERE slug = 'b'")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO trial_classes (participant_name, phone, status)
         VALUES ('x', '0800000000', 'PENDING'), ('y', '0800000000', 'CONFIRMED')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO contacts (full_name, email, message) VALUES ('c', 'c@x.io', 'hi')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO visitor_logs (page_path) VALUES ('/')")
        .execute(&pool)
        .await
        .unwrap();

    let summary = DashboardRepo::summary(&pool).await.unwrap();
    assert_eq!(summary.total_branches, 1);
    assert_eq!(summary.total_programs, 0);
    assert_eq!(summary.pending_trial_classes, 1);
    assert_eq!(summary.new_contacts, 1);
    assert_eq!(summary.visitors_this_month, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_trial_classes_by_branch(pool: PgPool) {
    let branch_id: i64 = sqlx::query_scalar(
        "INSERT INTO branches (branch_name, slug) VALUES ('North', 'north') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO trial_classes (branch_id, participant_name, phone, created_at) VALUES
            ($1, 'a', '0800000000', '2024-02-10T00:00:00Z'),
            ($1, 'b', '0800000000', '2024-02-11T00:00:00Z'),
            (NULL, 'c', '0800000000', '2024-06-01T00:00:00Z'),
            ($1, 'd', '0800000000', '2023-02-01T00:00:00Z')",
    )
    .bind(branch_id)
    .execute(&pool)
    .await
    .unwrap();

    let rows = DashboardRepo::trial_classes_by_branch(&pool, 2024).await.unwrap();
    let rows: Vec<(Option<i64>, Option<&str>, i32, i64)> = rows
        .iter()
        .map(|r| (r.branch_id, r.branch_name.as_deref(), r.month, r.total))
        .collect();
    assert_eq!(
        rows,
        vec![(Some(branch_id), Some("North"), 2, 2), (None, None, 6, 1)]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_contacts_by_status(pool: PgPool) {
    sqlx::query(
        "INSERT INTO contacts (full_name, email, message, status) VALUES
            ('a', 'a@x.io', 'm', 'NEW'),
            ('b', 'b@x.io', 'm', 'NEW'),
            ('c', 'c@x.io', 'm', 'DONE')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let rows = DashboardRepo::contacts_by_status(&pool).await.unwrap();
    let rows: Vec<(&str, i64)> = rows.iter().map(|r| (r.status.as_str(), r.total)).collect();
    assert_eq!(rows, vec![("DONE", 1), ("NEW", 2)]);
}
