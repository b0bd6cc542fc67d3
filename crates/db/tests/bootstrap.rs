use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    courtside_db::health_check(&pool).await.unwrap();

    let admin_roles: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE role_name = 'admin'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(admin_roles, 1);

    for table in ["menu_labels", "menus", "role_menus"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count > 0, "{table} should have seed data, got 0 rows");
    }
}

/// Every seeded menu is granted to the admin role.
#[sqlx::test(migrations = "./migrations")]
async fn test_admin_sees_every_seeded_menu(pool: PgPool) {
    let menus: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus")
        .fetch_one(&pool)
        .await
        .unwrap();
    let granted: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM role_menus rm JOIN roles r ON r.id = rm.role_id
         WHERE r.role_name = 'admin'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(menus, granted);
}

/// The updated_at trigger advances the timestamp on UPDATE.
#[sqlx::test(migrations = "./migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, before): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO branches (branch_name, slug, updated_at)
         VALUES ('Trigger', 'trigger', NOW() - INTERVAL '1 hour')
         RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let after: chrono::DateTime<chrono::Utc> =
        sqlx::query_scalar("UPDATE branches SET address = 'x' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(after > before);
}
