use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside_api::auth::password::hash_password;
use courtside_api::config::ServerConfig;
use courtside_api::router::build_app_router;
use courtside_api::state::AppState;
use courtside_core::roles::ROLE_ADMIN;
use courtside_core::validation::MIN_PASSWORD_LENGTH;
use courtside_db::models::user::NewUser;
use courtside_db::repositories::{RoleRepo, UserRepo};
use courtside_db::resource::CrudRepo;
use courtside_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections: u32 = match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(raw) => raw
            .parse()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?,
        Err(_) => courtside_db::DEFAULT_MAX_CONNECTIONS,
    };

    let pool = courtside_db::create_pool(&database_url, max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(max_connections, "Database connection pool created");

    courtside_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    courtside_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    bootstrap_admin(&pool).await?;

    // --- Upload root ---
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", config.upload_dir.display()))?;

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    // --- Router ---
    let app = build_app_router(state)?;

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Create the first admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD`.
///
/// Only runs while the `users` table is empty, so it never touches an
/// existing installation.
async fn bootstrap_admin(pool: &DbPool) -> anyhow::Result<()> {
    let (Ok(email), Ok(password)) = (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD"))
    else {
        return Ok(());
    };

    if UserRepo::count_all(pool).await? > 0 {
        tracing::debug!("Users exist, skipping admin bootstrap");
        return Ok(());
    }

    anyhow::ensure!(
        password.len() as u64 >= MIN_PASSWORD_LENGTH,
        "ADMIN_PASSWORD must be at least {MIN_PASSWORD_LENGTH} characters"
    );

    let role_id = RoleRepo::find_id_by_name(pool, ROLE_ADMIN)
        .await?
        .with_context(|| format!("Role '{ROLE_ADMIN}' is missing; migrations incomplete?"))?;

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Password hashing error: {e}"))?;

    let user = CrudRepo::<UserRepo>::create(
        pool,
        &NewUser {
            role_id,
            full_name: "Administrator".into(),
            email,
            password_hash,
            user_status: true,
        },
    )
    .await
    .context("Failed to create bootstrap admin")?;

    tracing::info!(user_id = user.id, email = %user.email, "Bootstrap admin created");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
