//! Break alert dispatch

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{notification::send_notification, sound::play_sound};

/// Content of a break alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub sound: Option<PathBuf>,
}

/// Something that can put an alert in front of the user.
///
/// `dispatch` must return promptly; anything slow belongs on a detached task.
pub trait AlertSink: Send + Sync + fmt::Debug {
    fn dispatch(&self, alert: &Alert);
}

/// Desktop notification plus an optional chime.
///
/// The two are attempted independently and neither failure is reported back.
#[derive(Debug, Clone)]
pub struct DesktopAlerter {
    sound_player: String,
}

impl DesktopAlerter {
    pub fn new(sound_player: impl Into<String>) -> Self {
        Self {
            sound_player: sound_player.into(),
        }
    }
}

impl AlertSink for DesktopAlerter {
    fn dispatch(&self, alert: &Alert) {
        info!("Dispatching break alert: {}", alert.title);

        send_notification(&alert.title, &alert.message);

        if let Some(sound) = &alert.sound {
            play_sound(&self.sound_player, sound);
        }
    }
}
