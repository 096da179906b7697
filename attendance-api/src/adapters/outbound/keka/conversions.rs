use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

use crate::domain::{
    models::{DayRecord, PunchEvent, PunchStatus},
    AttendanceError,
};

/// Convert a Keka AttendanceDay to a domain DayRecord.
///
/// Punches that cannot be converted are dropped with a warning rather than
/// failing the whole day.
pub fn to_domain_day_record(day: keka::AttendanceDay) -> DayRecord {
    let punches = day
        .time_entries
        .into_iter()
        .filter_map(|entry| {
            to_domain_punch(entry)
                .map_err(|e| {
                    tracing::warn!("Skipping punch: {}", e);
                })
                .ok()
        })
        .collect();

    DayRecord {
        attendance_date: day.attendance_date,
        shift_hours: day.shift_effective_duration,
        punches,
    }
}

/// Convert a Keka TimeEntry to a domain PunchEvent.
pub fn to_domain_punch(entry: keka::TimeEntry) -> Result<PunchEvent, AttendanceError> {
    let timestamp = entry
        .timestamp
        .as_deref()
        .ok_or_else(|| AttendanceError::unknown("punch has no timestamp"))
        .and_then(parse_timestamp)?;
    let status = entry
        .punch_status
        .map(PunchStatus::from)
        .ok_or_else(|| AttendanceError::unknown("punch has no status"))?;

    let mut punch = PunchEvent::new(timestamp, status);
    if let Some(premise_name) = entry.premise_name {
        punch = punch.with_premise(premise_name);
    }
    Ok(punch)
}

/// Parse a Keka timestamp. Keka normally sends RFC 3339; timestamps without
/// an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, AttendanceError> {
    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(timestamp);
    }

    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    )
    .map(PrimitiveDateTime::assume_utc)
    .map_err(|e| AttendanceError::unknown(format!("Invalid timestamp {}: {}", raw, e)))
}
