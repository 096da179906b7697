use async_trait::async_trait;

use crate::domain::{models::DayRecord, AttendanceError};

/// Outbound port for reading attendance data.
///
/// A provider is created per request with the caller's token, so methods take
/// no user argument.
#[async_trait]
pub trait AttendanceProvider: Send + Sync + 'static {
    /// Every day record the provider knows about for the user.
    async fn get_day_records(&self) -> Result<Vec<DayRecord>, AttendanceError>;
}
