use time::Date;

use super::PunchEvent;

/// Shift length assumed when a day does not state one.
pub const DEFAULT_SHIFT_HOURS: f64 = 8.0;

/// One calendar day of a user's attendance.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// Date as reported upstream; may carry a time component.
    pub attendance_date: Option<String>,
    pub shift_hours: Option<f64>,
    pub punches: Vec<PunchEvent>,
}

impl DayRecord {
    pub fn new(attendance_date: impl Into<String>) -> Self {
        Self {
            attendance_date: Some(attendance_date.into()),
            shift_hours: None,
            punches: Vec::new(),
        }
    }

    pub fn with_shift_hours(mut self, hours: f64) -> Self {
        self.shift_hours = Some(hours);
        self
    }

    pub fn with_punches(mut self, punches: Vec<PunchEvent>) -> Self {
        self.punches = punches;
        self
    }

    /// Whether the upstream date contains `date` as `YYYY-MM-DD`.
    pub fn is_on(&self, date: Date) -> bool {
        let needle = date.to_string();
        self.attendance_date
            .as_deref()
            .is_some_and(|attendance_date| attendance_date.contains(&needle))
    }

    /// Shift hours, falling back to [`DEFAULT_SHIFT_HOURS`] when missing or zero.
    pub fn effective_shift_hours(&self) -> f64 {
        match self.shift_hours {
            Some(hours) if hours.is_finite() && hours != 0.0 => hours,
            _ => DEFAULT_SHIFT_HOURS,
        }
    }
}

/// Picks the first record that falls on `date`.
pub fn find_record_on(records: Vec<DayRecord>, date: Date) -> Option<DayRecord> {
    records.into_iter().find(|record| record.is_on(date))
}
