//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Local, Utc};
use tokio::{
    sync::{oneshot, watch, Notify},
    time::Instant as TickInstant,
};
use tracing::{debug, info};

use super::TimerState;
use crate::{
    services::{Alert, AlertSink},
    status::{status_label, GlyphSpec, NOT_RUNNING_LABEL},
    tasks::break_timer_task,
};

/// Timer state plus the handle of the cadence currently driving it
#[derive(Debug, Default)]
struct Schedule {
    timer: TimerState,
    /// Incremented on every start so a superseded cadence can tell it is stale
    cycle: u64,
    stop_tx: Option<oneshot::Sender<()>>,
    /// Runtime clock reading and wall clock reading taken together at start
    anchor: Option<(TickInstant, DateTime<Local>)>,
}

impl Schedule {
    /// Wall clock time matching `deadline`, measured from the start anchor
    fn wall_clock(&self, deadline: TickInstant) -> Result<DateTime<Local>, String> {
        let (anchor_tick, anchor_wall) = self.anchor
            .ok_or_else(|| "Break schedule has no start anchor".to_string())?;
        let offset = chrono::Duration::from_std(deadline.saturating_duration_since(anchor_tick))
            .map_err(|e| format!("Next break time is out of range: {}", e))?;
        anchor_wall.checked_add_signed(offset)
            .ok_or_else(|| "Next break time is out of range".to_string())
    }

    /// Point the schedule at the cadence's next runtime deadline
    fn reschedule(&mut self, deadline: TickInstant) -> Result<DateTime<Local>, String> {
        let next_break_at = self.wall_clock(deadline)?;
        self.timer = TimerState::running(next_break_at);
        Ok(next_break_at)
    }

    fn clear(&mut self) {
        self.timer = TimerState::idle();
        self.anchor = None;
    }
}

/// Main application state shared by command handlers and background tasks
#[derive(Debug)]
pub struct AppState {
    schedule: Mutex<Schedule>,
    /// Fixed length of a break cycle
    pub interval: Duration,
    /// What gets shown when a break is due
    pub alert: Alert,
    alerter: Arc<dyn AlertSink>,
    /// Status indicator glyph
    pub glyph: GlyphSpec,
    /// Server metadata
    pub start_time: Instant,
    /// Last command tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Latest status label for the indicator
    status_tx: watch::Sender<String>,
    quit: Notify,
}

impl AppState {
    /// Create a new, idle AppState
    pub fn new(
        interval: Duration,
        alert: Alert,
        glyph: GlyphSpec,
        alerter: Arc<dyn AlertSink>,
    ) -> Result<Self, String> {
        if interval.is_zero() {
            return Err("Break interval must be at least one second".to_string());
        }
        chrono::Duration::from_std(interval)
            .map_err(|e| format!("Break interval {:?} is out of range: {}", interval, e))?;
        let (status_tx, _) = watch::channel(NOT_RUNNING_LABEL.to_string());

        Ok(Self {
            schedule: Mutex::new(Schedule::default()),
            interval,
            alert,
            alerter,
            glyph,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            status_tx,
            quit: Notify::new(),
        })
    }

    fn lock_schedule(&self) -> Result<MutexGuard<'_, Schedule>, String> {
        self.schedule.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Begin the break cycle.
    ///
    /// Already running is not an error: the schedule is left alone and no
    /// second cadence is spawned.
    pub fn start(self: &Arc<Self>) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;
        if schedule.timer.running {
            debug!("Start requested while already running, ignoring");
            return Ok(schedule.timer.clone());
        }

        let now = TickInstant::now();
        let deadline = now + self.interval;
        schedule.anchor = Some((now, Local::now()));
        let next_break_at = match schedule.reschedule(deadline) {
            Ok(at) => at,
            Err(e) => {
                schedule.clear();
                return Err(e);
            }
        };
        let (stop_tx, stop_rx) = oneshot::channel();
        schedule.cycle += 1;
        schedule.stop_tx = Some(stop_tx);
        let cycle = schedule.cycle;
        let timer = schedule.timer.clone();
        drop(schedule); // Release the lock before spawning

        tokio::spawn(break_timer_task(Arc::clone(self), cycle, deadline, stop_rx));

        info!("Break cycle started, next break at {}", next_break_at.format("%H:%M:%S"));
        self.record_action("start");
        Ok(timer)
    }

    /// End the break cycle and clear the schedule
    pub fn stop(&self) -> Result<TimerState, String> {
        let mut schedule = self.lock_schedule()?;
        let was_running = schedule.timer.running;
        schedule.clear();
        let stop_tx = schedule.stop_tx.take();
        drop(schedule);

        if let Some(stop_tx) = stop_tx {
            // The cadence may already have exited on its own
            let _ = stop_tx.send(());
        }

        if was_running {
            info!("Break cycle stopped");
        }
        self.record_action("stop");
        Ok(TimerState::idle())
    }

    /// Fire the alert right away without touching the schedule
    pub fn test_alert(&self) {
        info!("Test alert requested");
        self.record_action("test-alert");
        self.fire_alert();
    }

    /// Stop the timer and ask the main task to exit
    pub fn quit(&self) -> Result<TimerState, String> {
        info!("Quit requested");
        let timer = self.stop()?;
        self.record_action("quit");
        self.quit.notify_one();
        Ok(timer)
    }

    /// Resolves once `quit` has been called
    pub async fn quit_requested(&self) {
        self.quit.notified().await
    }

    /// Hand the configured alert to the sink
    pub fn fire_alert(&self) {
        self.alerter.dispatch(&self.alert);
    }

    /// Called by the cadence when its delay elapses.
    ///
    /// Moves the schedule to one interval from now and returns the new
    /// deadline with its wall clock time, or `None` when `cycle` is no longer
    /// the active one and the cadence should exit without alerting.
    pub(crate) fn complete_cycle(
        &self,
        cycle: u64,
    ) -> Result<Option<(TickInstant, DateTime<Local>)>, String> {
        let mut schedule = self.lock_schedule()?;
        if !schedule.timer.running || schedule.cycle != cycle {
            return Ok(None);
        }
        let deadline = TickInstant::now() + self.interval;
        let next_break_at = schedule.reschedule(deadline)?;
        Ok(Some((deadline, next_break_at)))
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.lock_schedule().map(|schedule| schedule.timer.clone())
    }

    /// Format the current status as the indicator shows it
    pub fn status_label(&self) -> Result<String, String> {
        let timer = self.get_timer_state()?;
        Ok(status_label(&timer, Local::now()))
    }

    /// Publish a label to indicator watchers, returns whether it changed
    pub fn publish_status(&self, label: String) -> bool {
        self.status_tx.send_if_modified(|current| {
            if *current == label {
                false
            } else {
                *current = label;
                true
            }
        })
    }

    /// Watch the label published by the status refresh task
    pub fn subscribe_status(&self) -> watch::Receiver<String> {
        self.status_tx.subscribe()
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last command information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
