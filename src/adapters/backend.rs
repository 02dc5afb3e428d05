//! Simulated facilitation backend

use crate::error::Result;
use crate::ports::backend::FacilitationServicePort;
use async_trait::async_trait;
use std::time::Duration;

/// Latency-only stand-in for a real facilitation service.
///
/// Sleeps for the configured latency and succeeds; failure paths are
/// exercised through mocks in tests.
pub struct SimulatedFacilitationService {
    latency: Duration,
}

impl SimulatedFacilitationService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedFacilitationService {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl FacilitationServicePort for SimulatedFacilitationService {
    async fn start_meeting(&self, meeting_id: i64) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        log::debug!("simulated backend acknowledged start of meeting {}", meeting_id);
        Ok(())
    }

    async fn end_meeting(&self, meeting_id: i64) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        log::debug!("simulated backend acknowledged end of meeting {}", meeting_id);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "simulated"
    }
}
