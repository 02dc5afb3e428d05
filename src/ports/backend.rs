/// Facilitation service port trait
///
/// Stands in for the backend a production deployment would notify when a
/// meeting starts or ends. The demo adapter only simulates latency, but the
/// operations stay fallible so the session's error path is exercised the
/// same way a real service fault would be.
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for the facilitation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FacilitationServicePort: Send + Sync {
    /// Announce that a meeting is starting. The caller only commits the
    /// start side effects after this returns `Ok`.
    async fn start_meeting(&self, meeting_id: i64) -> Result<()>;

    /// Announce that a meeting has ended.
    async fn end_meeting(&self, meeting_id: i64) -> Result<()>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
