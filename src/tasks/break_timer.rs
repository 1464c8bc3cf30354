//! Break timer background task

use std::sync::Arc;
use tokio::{
    sync::oneshot,
    time::{sleep_until, Instant},
};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Drive break cycles until stopped.
///
/// Each cycle is one cancellable delay until the scheduled deadline. A stop
/// signal (or the sender being dropped) ends the task without alerting.
pub async fn break_timer_task(
    state: Arc<AppState>,
    cycle: u64,
    first_deadline: Instant,
    mut stop_rx: oneshot::Receiver<()>,
) {
    debug!("Break cadence {} running, interval {}s", cycle, state.interval.as_secs());

    let mut deadline = first_deadline;
    loop {
        tokio::select! {
            _ = &mut stop_rx => {
                debug!("Break cadence {} cancelled", cycle);
                return;
            }
            _ = sleep_until(deadline) => {}
        }

        match state.complete_cycle(cycle) {
            Ok(Some((next_deadline, next_break_at))) => {
                deadline = next_deadline;
                info!("Break due, next one at {}", next_break_at.format("%H:%M:%S"));
                state.fire_alert();
            }
            Ok(None) => {
                debug!("Break cadence {} superseded, exiting", cycle);
                return;
            }
            Err(e) => {
                error!("Failed to reset break schedule: {}", e);
                return;
            }
        }
    }
}
