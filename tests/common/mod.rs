use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use twenty_twenty_twenty::{
    services::{Alert, AlertSink},
    status::{GlyphSpec, Rgb},
    AppState,
};

/// Counts alerts instead of showing them
#[derive(Debug, Default)]
pub struct CountingAlerter {
    fired: AtomicUsize,
}

impl CountingAlerter {
    pub fn count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl AlertSink for CountingAlerter {
    fn dispatch(&self, _alert: &Alert) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn test_state(interval_secs: u64) -> (Arc<AppState>, Arc<CountingAlerter>) {
    let alerter = Arc::new(CountingAlerter::default());
    let state = AppState::new(
        Duration::from_secs(interval_secs),
        Alert {
            title: "20-20-20 Reminder".to_string(),
            message: "Look away".to_string(),
            sound: None,
        },
        GlyphSpec {
            size: 64,
            background: Rgb(255, 255, 255),
            foreground: Rgb(0, 0, 0),
        },
        alerter.clone(),
    )
    .unwrap();
    (Arc::new(state), alerter)
}
