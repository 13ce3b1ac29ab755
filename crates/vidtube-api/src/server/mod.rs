//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use vidtube_common::{AppConfig, AppError};
use vidtube_db::{seed_demo, Database};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize the store and create AppState
///
/// Development environments get a demo data set so the API is usable
/// out of the box; other environments start empty.
pub fn create_app_state(config: AppConfig) -> AppState {
    let db = Arc::new(Database::new());

    if config.app.env.is_development() {
        if let Err(e) = seed_demo(&db) {
            tracing::warn!(error = %e, "Failed to seed demo data");
        } else {
            info!("Demo data seeded");
        }
    }

    AppState::new(db, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::internal(anyhow::anyhow!("invalid listen address: {e}")))?;

    let state = create_app_state(config);
    let app = create_app(state);

    run_server(app, addr).await
}
