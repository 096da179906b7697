use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    clock,
    models::{find_record_on, DaySummary, WorkTarget},
    ports::{inbound::AttendanceService, outbound::AttendanceProvider},
    AttendanceError,
};

/// Implementation of the AttendanceService inbound port.
///
/// Fetches day records through an AttendanceProvider and reduces today's
/// record into a summary.
pub struct AttendanceServiceImpl<P> {
    provider: Arc<P>,
}

impl<P> AttendanceServiceImpl<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

impl<P: AttendanceProvider> AttendanceServiceImpl<P> {
    async fn summarize_at(
        &self,
        target: &WorkTarget,
        now: OffsetDateTime,
    ) -> Result<Option<DaySummary>, AttendanceError> {
        let records = self.provider.get_day_records().await?;
        let today = clock::today(now);

        let Some(record) = find_record_on(records, today) else {
            tracing::debug!(%today, "No attendance record for today");
            return Ok(None);
        };

        DaySummary::compute(record, target, now).map(Some)
    }
}

#[async_trait]
impl<P: AttendanceProvider> AttendanceService for AttendanceServiceImpl<P> {
    async fn summarize_today(
        &self,
        target: &WorkTarget,
    ) -> Result<Option<DaySummary>, AttendanceError> {
        self.summarize_at(target, OffsetDateTime::now_utc()).await
    }
}
