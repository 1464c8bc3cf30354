//! Status refresh background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Recompute the indicator label once per second and publish it
pub async fn status_refresh_task(state: Arc<AppState>) {
    info!("Starting status refresh task");

    let mut interval = interval(Duration::from_secs(1));

    loop {
        interval.tick().await;

        match state.status_label() {
            Ok(label) => {
                if state.publish_status(label.clone()) {
                    debug!("Status: {}", label);
                }
            }
            Err(e) => {
                warn!("Failed to refresh status: {}", e);
            }
        }
    }
}
