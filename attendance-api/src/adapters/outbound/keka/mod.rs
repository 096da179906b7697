mod conversions;

use async_trait::async_trait;

use crate::domain::{models::DayRecord, ports::outbound::AttendanceProvider, AttendanceError};

use self::conversions::to_domain_day_record;

/// Adapter that wraps the Keka client to implement the AttendanceProvider port.
pub struct KekaAdapter {
    client: keka::KekaClient,
}

impl KekaAdapter {
    pub fn new(client: keka::KekaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttendanceProvider for KekaAdapter {
    async fn get_day_records(&self) -> Result<Vec<DayRecord>, AttendanceError> {
        let days = self
            .client
            .fetch_attendance_summary()
            .await
            .map_err(map_keka_error)?;

        Ok(days.into_iter().map(to_domain_day_record).collect())
    }
}

pub fn map_keka_error(e: keka::KekaFetchError) -> AttendanceError {
    match e {
        keka::KekaFetchError::MissingToken => AttendanceError::MissingToken,
        keka::KekaFetchError::Upstream { status, body } => {
            AttendanceError::Upstream { status, body }
        }
        keka::KekaFetchError::ResponseError(msg) => AttendanceError::unknown(msg),
        keka::KekaFetchError::ParsingError(msg) => AttendanceError::unknown(msg),
    }
}
