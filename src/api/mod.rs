//! HTTP API module
//!
//! The status indicator's control surface: commands and status queries.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{state::AppState, utils::shutdown_signal};
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/test-alert", post(test_alert_handler))
        .route("/quit", post(quit_handler))
        .route("/status", get(status_handler))
        .route("/indicator", get(indicator_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the control surface until quit is requested or a shutdown signal
/// arrives. Requests already in flight, including `/quit` itself, are
/// answered before this returns.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let app = create_router(Arc::clone(&state));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = state.quit_requested() => {
                    info!("Quit command received");
                }
                _ = shutdown_signal() => {
                    info!("Shutdown signal received");
                    if let Err(e) = state.stop() {
                        warn!("Failed to stop break cycle: {}", e);
                    }
                }
            }
        })
        .await
}
