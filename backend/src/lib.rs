//! Exercise tracker API.
//!
//! Modules:
//! - `config`: environment configuration
//! - `db`: the `UserStore` trait with Postgres and in-memory implementations
//! - `services`: calendar-date grammar and the exercise log query
//! - `handlers`: axum handlers for users, exercises, logs and health
//! - `dto`: request and response shapes

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod request_log;
pub mod services;

use config::Config;
use db::{MemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    pub fn in_memory(config: Config) -> Self {
        Self::new(Arc::new(MemoryUserStore::new()), Arc::new(config))
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let static_files = ServeDir::new(&state.config.static_dir);

    let api_routes = Router::new()
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/users/:user_id/exercises",
            post(handlers::exercises::create_exercise),
        )
        .route("/api/users/:user_id/logs", get(handlers::logs::get_logs));

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(api_routes)
        .nest_service("/public", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::from_fn(request_log::log_request)),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
