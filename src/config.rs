//! Session configuration
//!
//! Tuning knobs for the dashboard session and its mock content stream. The
//! defaults mirror the demo tuning; none of them is a contract.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feature switches for the dashboard variants.
///
/// The product ships one session engine; the lighter dashboard builds turn
/// individual surfaces off instead of shipping their own state machines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionFeatures {
    /// Multi-meeting list with selection.
    pub meeting_list: bool,

    /// Per-insight AI chat threads.
    pub ai_chat: bool,
}

impl Default for SessionFeatures {
    fn default() -> Self {
        Self {
            meeting_list: true,
            ai_chat: true,
        }
    }
}

/// Configuration for a facilitator session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingConfig {
    /// Cadence of the simulated transcript stream.
    pub update_interval: Duration,

    /// Probability that a stream tick also yields an AI insight (0.0 to 1.0).
    pub insight_probability: f64,

    /// Character threshold below which transcript previews are shown whole.
    /// Display concern only; the logs themselves are never truncated.
    pub min_transcript_length: usize,

    /// Enabled dashboard surfaces.
    pub features: SessionFeatures,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_secs(10),
            insight_probability: 0.3,
            min_transcript_length: 100,
            features: SessionFeatures::default(),
        }
    }
}
