//! Timer state structure and management

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Break cycle state shared between command handlers and background tasks.
///
/// `next_break_at` is present exactly when `running` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub running: bool,
    pub next_break_at: Option<DateTime<Local>>,
}

impl TimerState {
    /// Create a new idle timer state
    pub fn new() -> Self {
        Self::idle()
    }

    /// Create a running timer state with the next break at `next_break_at`
    pub fn running(next_break_at: DateTime<Local>) -> Self {
        Self {
            running: true,
            next_break_at: Some(next_break_at),
        }
    }

    /// Create an idle timer state
    pub fn idle() -> Self {
        Self {
            running: false,
            next_break_at: None,
        }
    }

    /// Check if the break cycle is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left until the next break, negative once it is overdue
    pub fn remaining(&self, now: DateTime<Local>) -> Option<Duration> {
        match (self.running, self.next_break_at) {
            (true, Some(at)) => Some(at - now),
            _ => None,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_schedule() {
        let state = TimerState::new();
        assert!(!state.is_running());
        assert_eq!(state.next_break_at, None);
        assert_eq!(state.remaining(Local::now()), None);
    }

    #[test]
    fn remaining_goes_negative_when_overdue() {
        let now = Local::now();
        let state = TimerState::running(now + Duration::seconds(90));
        assert_eq!(state.remaining(now), Some(Duration::seconds(90)));
        assert_eq!(
            state.remaining(now + Duration::seconds(100)),
            Some(Duration::seconds(-10))
        );
    }
}
