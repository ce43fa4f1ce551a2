//! HTTP server for quizd

use crate::routes;
use crate::store::GameStore;
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: GameStore,
    pub default_skin_path: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: GameStore, default_skin_path: String) -> Self {
        Self {
            store,
            default_skin_path,
            start_time: Instant::now(),
        }
    }
}

/// Build the full application router, CORS included.
pub fn app(state: Arc<AppState>, cors_origin: &str) -> Result<Router> {
    let origin: HeaderValue = cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    // The browser client is served from a fixed development origin
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .merge(routes::player_routes())
        .merge(routes::phase_routes())
        .merge(routes::quiz_routes())
        .merge(routes::skin_routes())
        .merge(routes::badge_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Run the HTTP server
pub async fn run(state: AppState, listen_addr: &str, cors_origin: &str) -> Result<()> {
    let app = app(Arc::new(state), cors_origin)?;

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    info!("  Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
