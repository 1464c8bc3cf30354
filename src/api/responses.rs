//! API response structures

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::TimerState,
    status::{DiscBounds, GlyphSpec},
};

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a running response
    pub fn running(message: String, timer: TimerState) -> Self {
        Self::new("running".to_string(), message, timer)
    }

    /// Create a stopped response
    pub fn stopped(message: String, timer: TimerState) -> Self {
        Self::new("stopped".to_string(), message, timer)
    }

    /// Create a response for a manually fired alert
    pub fn alerted(message: String, timer: TimerState) -> Self {
        Self::new("alerted".to_string(), message, timer)
    }

    /// Create a response for a quit request
    pub fn quitting(message: String, timer: TimerState) -> Self {
        Self::new("quitting".to_string(), message, timer)
    }
}

/// Status response with the break schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub next_break_at: Option<DateTime<Local>>,
    pub remaining_seconds: Option<i64>,
    pub label: String,
    pub interval_seconds: u64,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// What the status indicator should display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorResponse {
    pub label: String,
    pub glyph: GlyphSpec,
    pub disc: DiscBounds,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
