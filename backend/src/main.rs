use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use exercise_tracker_api::config::Config;
use exercise_tracker_api::db::{MemoryUserStore, PgUserStore, UserStore};
use exercise_tracker_api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exercise_tracker_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    let store: Arc<dyn UserStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = PgUserStore::connect(url, config.database_max_connections)
                .await
                .context("Failed to create database pool")?;
            store
                .migrate()
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping users and exercises in memory");
            Arc::new(MemoryUserStore::new())
        }
    };

    let app = build_router(AppState::new(store, config.clone()));

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    // Connect info gives the request logger the client IP
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
