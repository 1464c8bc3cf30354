//! Status label shown by the indicator

use std::fmt;

use chrono::{DateTime, Local};

use crate::state::TimerState;

pub const NOT_RUNNING_LABEL: &str = "Not running";
pub const BREAK_DUE_LABEL: &str = "Break due!";

/// What the status indicator should currently read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    NotRunning,
    /// Whole seconds left until the next break
    Countdown(u64),
    BreakDue,
}

impl StatusLabel {
    /// Derive the label from a timer snapshot.
    ///
    /// Only reads `state`; callers take the snapshot under the lock and format
    /// outside of it.
    pub fn from_state(state: &TimerState, now: DateTime<Local>) -> Self {
        if !state.running {
            return Self::NotRunning;
        }
        match state.remaining(now) {
            Some(delta) if delta > chrono::Duration::zero() => {
                // num_seconds truncates toward zero, which is floor for positive deltas
                Self::Countdown(delta.num_seconds().unsigned_abs())
            }
            _ => Self::BreakDue,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRunning => f.write_str(NOT_RUNNING_LABEL),
            Self::Countdown(seconds) => write!(f, "Next: {}", format_remaining(*seconds)),
            Self::BreakDue => f.write_str(BREAK_DUE_LABEL),
        }
    }
}

/// Render seconds as zero-padded `MM:SS`; minutes keep growing past 59.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Human readable status for a timer snapshot
pub fn status_label(state: &TimerState, now: DateTime<Local>) -> String {
    StatusLabel::from_state(state, now).to_string()
}
