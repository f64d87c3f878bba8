use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use garagebook::config::AppConfig;
use garagebook::db;
use garagebook::handlers;
use garagebook::services::booking::BookingService;
use garagebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    tracing::info!("ledger store: {}", config.database_url);

    let state = Arc::new(AppState {
        service: BookingService::new(conn),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(handlers::health::health))
        .route("/api/slots", get(handlers::slots::get_slots))
        .route("/api/book", post(handlers::booking::book_slot))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
