//! Core engine for a meeting-facilitation dashboard.
//!
//! Everything a dashboard frontend needs short of rendering: the meeting
//! lifecycle state machine, agenda progression, a simulated live transcript
//! stream with AI insights, and the derived views over the in-memory
//! meeting store. Content is demo data; no backend services are involved.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod session;

pub use config::{MeetingConfig, SessionFeatures};
pub use error::{AppError, Result};
pub use session::reducer::MeetingAction;
pub use session::timer::format_time;
pub use session::FacilitatorSession;
