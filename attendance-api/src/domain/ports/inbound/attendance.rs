use async_trait::async_trait;

use crate::domain::{
    models::{DaySummary, WorkTarget},
    AttendanceError,
};

/// Inbound port for attendance summaries.
#[async_trait]
pub trait AttendanceService: Send + Sync + 'static {
    /// Summarize today's punches against `target`.
    ///
    /// Returns `Ok(None)` when the provider has no record for today.
    async fn summarize_today(
        &self,
        target: &WorkTarget,
    ) -> Result<Option<DaySummary>, AttendanceError>;
}
