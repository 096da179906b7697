//! HTTP response types for the attendance endpoint.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;

use crate::domain::{
    clock::{format_clock_time, format_duration},
    models::{DaySummary, Interval},
    AttendanceError,
};

pub const NO_RECORD_MESSAGE: &str = "No attendance record found for today.";

/// Body of a successful `POST /attendance`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AttendanceResponse {
    Summary(AttendanceSummaryResponse),
    NoRecord(NoRecordResponse),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryResponse {
    /// e.g. `"6h 12m"` or `"6h 12m 40s"`.
    pub worked: String,
    pub remaining: String,
    /// Projected wall-clock time (IST) at which the target is met.
    pub leave_time: String,
    pub in_out_list: Vec<InOutResponse>,
}

impl TryFrom<DaySummary> for AttendanceSummaryResponse {
    type Error = AttendanceError;

    fn try_from(summary: DaySummary) -> Result<Self, Self::Error> {
        let in_out_list = summary
            .intervals
            .into_iter()
            .map(InOutResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            worked: format_duration(summary.worked, summary.format),
            remaining: format_duration(summary.remaining, summary.format),
            leave_time: format_clock_time(summary.leave_time)?,
            in_out_list,
        })
    }
}

/// One in/out pair. `out` is null while the interval is open.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InOutResponse {
    #[serde(rename = "in")]
    pub in_time: String,
    #[serde(rename = "out")]
    pub out_time: Option<String>,
    pub is_missing: bool,
    pub location: String,
}

impl TryFrom<Interval> for InOutResponse {
    type Error = AttendanceError;

    fn try_from(interval: Interval) -> Result<Self, Self::Error> {
        Ok(Self {
            in_time: format_clock_time(interval.in_time)?,
            out_time: interval.out_time.map(format_clock_time).transpose()?,
            is_missing: interval.is_missing(),
            location: interval.location,
        })
    }
}

/// Returned with 200 when Keka has no record for today.
#[derive(Debug, Serialize)]
pub struct NoRecordResponse {
    pub error: String,
}

impl Default for NoRecordResponse {
    fn default() -> Self {
        Self {
            error: NO_RECORD_MESSAGE.to_string(),
        }
    }
}
