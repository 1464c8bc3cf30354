//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use tracing::{error, info};

use crate::{
    state::AppState,
    status::status_label,
};
use super::responses::{ApiResponse, HealthResponse, IndicatorResponse, StatusResponse};

/// Handle POST /start - Begin the break cycle
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok(timer) => {
            info!("Start endpoint called - break cycle running");
            Ok(Json(ApiResponse::running(
                "Break cycle running".to_string(),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to start break cycle: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /stop - End the break cycle
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.stop() {
        Ok(timer) => {
            info!("Stop endpoint called - break cycle stopped");
            Ok(Json(ApiResponse::stopped(
                "Break cycle stopped".to_string(),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to stop break cycle: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /test-alert - Fire the alert now, schedule untouched
pub async fn test_alert_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    state.test_alert();

    match state.get_timer_state() {
        Ok(timer) => Ok(Json(ApiResponse::alerted(
            "Test alert sent".to_string(),
            timer,
        ))),
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /quit - Stop the timer and shut down
pub async fn quit_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.quit() {
        Ok(timer) => Ok(Json(ApiResponse::quitting(
            "Shutting down".to_string(),
            timer,
        ))),
        Err(e) => {
            error!("Failed to quit cleanly: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the current break schedule
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let now = Local::now();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        running: timer.running,
        next_break_at: timer.next_break_at,
        remaining_seconds: timer.remaining(now).map(|d| d.num_seconds().max(0)),
        label: status_label(&timer, now),
        interval_seconds: state.interval.as_secs(),
        uptime: state.get_uptime(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /indicator - Label and glyph for the status indicator
pub async fn indicator_handler(State(state): State<Arc<AppState>>) -> Result<Json<IndicatorResponse>, StatusCode> {
    match state.status_label() {
        Ok(label) => Ok(Json(IndicatorResponse {
            label,
            glyph: state.glyph,
            disc: state.glyph.disc_bounds(),
        })),
        Err(e) => {
            error!("Failed to format status: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
