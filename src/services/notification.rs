//! Desktop notification delivery

use notify_rust::Notification;
use tracing::{debug, warn};

/// Show a desktop notification without blocking the caller.
///
/// Delivery happens on the blocking pool; failures are logged and dropped.
pub fn send_notification(title: &str, message: &str) {
    let title = title.to_string();
    let message = message.to_string();

    tokio::task::spawn_blocking(move || {
        debug!("Showing notification: {}", title);
        match Notification::new().summary(&title).body(&message).show() {
            Ok(_) => debug!("Notification delivered"),
            Err(e) => warn!("Failed to show notification: {}", e),
        }
    });
}
