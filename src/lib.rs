//! Twenty Twenty Twenty - A background break reminder
//!
//! Every interval (20 minutes by default) the user is reminded to look at
//! something 20 feet away for 20 seconds. The break cycle is controlled
//! through a small local HTTP surface that also serves the status label.

pub mod config;
pub mod state;
pub mod status;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState};
pub use api::{create_router, serve};
pub use services::{Alert, AlertSink, DesktopAlerter};
pub use utils::signals::shutdown_signal;
