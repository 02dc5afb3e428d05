//! Display clock for an active meeting
//!
//! Counts whole seconds on a background task while running and holds its
//! value once stopped. A fresh timer starts at zero; stopping never resets.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct MeetingTimer {
    elapsed: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl MeetingTimer {
    pub fn new() -> Self {
        Self {
            elapsed: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    /// Start counting. Starting an already-running timer is a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let elapsed = Arc::clone(&self.elapsed);
        self.handle = Some(tokio::spawn(async move {
            let mut ticks = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick fires immediately; skip it so the
            // counter reads 0 until a full second has passed.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                elapsed.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    /// Stop counting; the counter keeps its last value.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }
}

impl Default for MeetingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeetingTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Zero-padded `mm:ss` for the meeting clock.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
