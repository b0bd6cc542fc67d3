//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use courtside_api::auth::jwt::JwtConfig;
use courtside_api::auth::password::hash_password;
use courtside_api::config::ServerConfig;
use courtside_api::router::build_app_router;
use courtside_api::state::AppState;
use courtside_core::roles::ROLE_ADMIN;
use courtside_db::models::user::{NewUser, UserResponse};
use courtside_db::repositories::{RoleRepo, UserRepo};
use courtside_db::resource::CrudRepo;

pub const ADMIN_EMAIL: &str = "admin@courtside.test";
pub const ADMIN_PASSWORD: &str = "admin-password-1";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a fresh upload directory under the system temp dir, and a 1 KiB upload
/// limit so oversize uploads are cheap to provoke.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir().join(format!("courtside-test-{}", uuid::Uuid::new_v4())),
        upload_max_bytes: 1024,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_hours: 1,
        },
    }
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state).expect("router should build")
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Insert a user with the seeded `admin` role.
pub async fn create_admin_user(pool: &PgPool, email: &str, password: &str) -> UserResponse {
    let role_id = RoleRepo::find_id_by_name(pool, ROLE_ADMIN)
        .await
        .unwrap()
        .expect("admin role is seeded");
    CrudRepo::<UserRepo>::create(
        pool,
        &NewUser {
            role_id,
            full_name: "Test Admin".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            user_status: true,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Seed the default admin and log in through the API, returning the token.
pub async fn admin_token(pool: &PgPool, app: &Router) -> String {
    create_admin_user(pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// Log in and return the bearer token; panics unless the login succeeds.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/admin/v1/auth/login", body, None).await;
    assert_eq!(response.status(), 200, "login should succeed");
    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, builder(Method::GET, uri, token).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, token).body(Body::empty()).unwrap()).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    json_request(app, Method::POST, uri, body, token).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    json_request(app, Method::PUT, uri, body, token).await
}

async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let request = builder(method, uri, token)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a row through the admin API and return its id.
pub async fn create_via_api(
    app: &Router,
    token: &str,
    resource: &str,
    body: serde_json::Value,
) -> i64 {
    let response = post_json(app, &format!("/admin/v1/{resource}/create"), body, Some(token)).await;
    assert_eq!(response.status(), 201, "creating {resource} should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
