//! Background tasks module
//!
//! The break cadence and the status refresh loop that run alongside the
//! control surface.

pub mod break_timer;
pub mod status_refresh;

// Re-export main functions
pub use break_timer::break_timer_task;
pub use status_refresh::status_refresh_task;
