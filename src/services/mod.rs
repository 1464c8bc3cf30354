//! External collaborator module
//!
//! This module wraps the desktop notification and sound playback calls that
//! make up a break alert.

pub mod alert;
pub mod notification;
pub mod sound;

// Re-export main types and functions
pub use alert::{Alert, AlertSink, DesktopAlerter};
pub use notification::send_notification;
pub use sound::{check_sound_player, play_sound};
