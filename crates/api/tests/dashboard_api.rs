//! HTTP-level integration tests for the dashboard aggregates.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, create_via_api, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_counts_active_and_pending(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, &app).await;
    create_via_api(&app, &token, "branches", json!({ "branch_name": "A", "slug": "a" })).await;
    create_via_api(
        &app,
        &token,
        "trial-classes",
        json!({ "participant_name": "Kid", "phone": "0812 3456 789" }),
    )
    .await;
    post_json(
        &app,
        "/user/v1/visitor-logs/create",
        json!({ "page_path": "/" }),
        None,
    )
    .await;

    let response = get(&app, "/admin/v1/dashboard/summary", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_branches"], 1);
    assert_eq!(json["data"]["pending_trial_classes"], 1);
    assert_eq!(json["data"]["new_contacts"], 0);
    assert_eq!(json["data"]["visitors_this_month"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn monthly_visitors_always_has_twelve_entries(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, &app).await;
    sqlx::query(
        "INSERT INTO visitor_logs (page_path, visited_at) VALUES
            ('/a', '2024-03-05T10:00:00Z'),
            ('/a', '2024-03-20T10:00:00Z'),
            ('/b', '2024-11-01T00:00:00Z'),
            ('/b', '2023-11-01T00:00:00Z')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let json = body_json(get(&app, "/admin/v1/dashboard/visitors?year=2024", Some(&token)).await).await;
    let months = json["data"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[2], json!({ "month": 3, "label": "Mar", "total": 2 }));
    assert_eq!(months[10]["total"], 1);
    assert_eq!(months[0]["total"], 0);

    let json = body_json(get(&app, "/admin/v1/dashboard/visitors/yearly", Some(&token)).await).await;
    assert_eq!(
        json["data"],
        json!([{ "year": 2023, "total": 1 }, { "year": 2024, "total": 3 }])
    );

    let json = body_json(
        get(&app, "/admin/v1/dashboard/visitors/top-pages?limit=1", Some(&token)).await,
    )
    .await;
    let pages = json["data"].as_array().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["page_path"], "/a");
    assert_eq!(pages[0]["total"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn trial_classes_grouped_per_branch(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, &app).await;
    let branch = create_via_api(&app, &token, "branches", json!({ "branch_name": "East", "slug": "east" })).await;
    sqlx::query(
        "INSERT INTO trial_classes (branch_id, participant_name, phone, created_at) VALUES
            ($1, 'A', '0812 0000 001', '2024-01-10T00:00:00Z'),
            ($1, 'B', '0812 0000 002', '2024-01-11T00:00:00Z'),
            (NULL, 'C', '0812 0000 003', '2024-06-01T00:00:00Z')",
    )
    .bind(branch)
    .execute(&pool)
    .await
    .unwrap();

    let json = body_json(
        get(&app, "/admin/v1/dashboard/trial-classes?year=2024", Some(&token)).await,
    )
    .await;
    let series = json["data"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["branch_name"], "East");
    assert_eq!(series[0]["months"][0]["total"], 2);
    assert_eq!(series[0]["months"].as_array().unwrap().len(), 12);
    assert_eq!(series[1]["branch_name"], "Unassigned");
    assert_eq!(series[1]["months"][5]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contacts_by_status_reports_every_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, &app).await;
    create_via_api(
        &app,
        &token,
        "contacts",
        json!({ "full_name": "Ann", "email": "ann@example.com", "message": "Hi" }),
    )
    .await;

    let json = body_json(get(&app, "/admin/v1/dashboard/contacts/status", Some(&token)).await).await;
    assert_eq!(
        json["data"],
        json!([
            { "status": "NEW", "total": 1 },
            { "status": "IN_PROGRESS", "total": 0 },
            { "status": "DONE", "total": 0 },
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_year_is_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, &app).await;
    let response = get(&app, "/admin/v1/dashboard/visitors?year=0", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
