//! Calendar and clock rendering in the relay's fixed timezone.
//!
//! Every "today" lookup and every human-readable time goes through here, so the
//! rest of the domain can work purely with `OffsetDateTime` and `Duration`.

use time::{
    format_description::BorrowedFormatItem,
    macros::{format_description, offset},
    Date, Duration, OffsetDateTime, UtcOffset,
};

/// Indian Standard Time.
pub const IST: UtcOffset = offset!(+5:30);

const CLOCK_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12]:[minute]:[second] [period]");

/// How durations are rendered in a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationFormat {
    /// `"7h 42m"`
    HoursMinutes,
    /// `"7h 42m 5s"`
    HoursMinutesSeconds,
}

/// The calendar date of `now` in IST.
pub fn today(now: OffsetDateTime) -> Date {
    now.to_offset(IST).date()
}

/// Renders an instant as IST wall-clock time, e.g. `"09:05:03 AM"`.
pub fn format_clock_time(instant: OffsetDateTime) -> Result<String, time::error::Format> {
    instant.to_offset(IST).format(CLOCK_TIME)
}

/// Floor-divides a duration into hours, minutes and seconds. Negative input
/// renders as zero.
pub fn format_duration(duration: Duration, format: DurationFormat) -> String {
    let total_seconds = duration.whole_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    match format {
        DurationFormat::HoursMinutes => format!("{}h {}m", hours, minutes),
        DurationFormat::HoursMinutesSeconds => format!("{}h {}m {}s", hours, minutes, seconds),
    }
}
