//! Cafes API Server
//!
//! A small CRUD service over an in-memory collection of coffee records.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    handler::Handler,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{load_seed, InMemoryCafeRepository};
use app::CafeService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cafe_service: Arc<CafeService<InMemoryCafeRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        .route(
            "/cafes",
            get(handlers::list_cafes)
                .post(handlers::create_cafe)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/cafes/:id",
            get(handlers::get_cafe)
                .put(handlers::update_cafe)
                .delete(handlers::delete_cafe.layer(middleware::from_fn(auth::require_token)))
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cafes_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cafes API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    // Seed the store
    let seed = load_seed(config.seed_file.as_deref()).await?;
    let cafe_repo =
        Arc::new(InMemoryCafeRepository::with_cafes(seed).context("Invalid seed data")?);
    tracing::info!(cafes = cafe_repo.len().await, "Cafe store seeded");

    let state = AppState {
        cafe_service: Arc::new(CafeService::new(cafe_repo, &config.reserved_names)),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
