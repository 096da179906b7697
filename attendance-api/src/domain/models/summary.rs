use time::{Duration, OffsetDateTime};

use super::{pair_punches, DayRecord, Interval};
use crate::domain::{clock::DurationFormat, AttendanceError};

/// How much work the day requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkTarget {
    /// Use the day's shift length, rendered to the minute.
    Shift,
    /// Caller-supplied hours, rendered to the second.
    ProductiveHours(f64),
}

impl WorkTarget {
    pub fn productive_hours(hours: f64) -> Result<Self, AttendanceError> {
        if hours.is_finite() && hours > 0.0 {
            Ok(Self::ProductiveHours(hours))
        } else {
            Err(AttendanceError::InvalidTarget)
        }
    }

    pub fn duration_for(&self, day: &DayRecord) -> Duration {
        let hours = match self {
            Self::Shift => day.effective_shift_hours(),
            Self::ProductiveHours(hours) => *hours,
        };
        Duration::seconds((hours * 3600.0) as i64)
    }

    pub fn duration_format(&self) -> DurationFormat {
        match self {
            Self::Shift => DurationFormat::HoursMinutes,
            Self::ProductiveHours(_) => DurationFormat::HoursMinutesSeconds,
        }
    }
}

/// Total time worked up to `now`, in whole seconds.
///
/// Closed intervals count in full. Of the intervals still open, only the last
/// one in the list is treated as running; any earlier open ones add nothing.
pub fn worked_duration(intervals: &[Interval], now: OffsetDateTime) -> Duration {
    let completed: Duration = intervals
        .iter()
        .filter_map(|interval| {
            interval
                .out_time
                .map(|out_time| Duration::seconds((out_time - interval.in_time).whole_seconds()))
        })
        .sum();

    let running = intervals
        .iter()
        .rev()
        .find(|interval| interval.is_missing())
        .map(|interval| Duration::seconds((now - interval.in_time).whole_seconds().max(0)))
        .unwrap_or(Duration::ZERO);

    completed + running
}

/// Worked and remaining time for one day, as of a fixed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub worked: Duration,
    pub remaining: Duration,
    pub leave_time: OffsetDateTime,
    pub intervals: Vec<Interval>,
    pub format: DurationFormat,
}

impl DaySummary {
    /// Fails when the target is so large that the leave time cannot be
    /// represented.
    pub fn compute(
        day: DayRecord,
        target: &WorkTarget,
        now: OffsetDateTime,
    ) -> Result<Self, AttendanceError> {
        let required = target.duration_for(&day);
        let intervals = pair_punches(day.punches);
        let worked = worked_duration(&intervals, now);
        let remaining = required
            .checked_sub(worked)
            .unwrap_or(Duration::ZERO)
            .max(Duration::ZERO);
        let leave_time = now
            .checked_add(remaining)
            .ok_or_else(|| AttendanceError::unknown("leave time out of range"))?;

        Ok(Self {
            worked,
            remaining,
            leave_time,
            intervals,
            format: target.duration_format(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PunchEvent, PunchStatus};
    use time::macros::datetime;

    fn day(punches: Vec<(OffsetDateTime, PunchStatus)>) -> DayRecord {
        DayRecord::new("2024-05-10T00:00:00").with_punches(
            punches
                .into_iter()
                .map(|(at, status)| PunchEvent::new(at, status))
                .collect(),
        )
    }

    #[test]
    fn productive_hours_must_be_finite_and_positive() {
        assert!(WorkTarget::productive_hours(7.5).is_ok());
        for invalid in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                WorkTarget::productive_hours(invalid),
                Err(AttendanceError::InvalidTarget)
            ));
        }
    }

    #[test]
    fn target_duration_uses_shift_or_productive_hours() {
        let record = DayRecord::new("2024-05-10").with_shift_hours(9.0);
        assert_eq!(WorkTarget::Shift.duration_for(&record), Duration::hours(9));
        assert_eq!(
            WorkTarget::ProductiveHours(7.5).duration_for(&record),
            Duration::minutes(450)
        );
    }

    #[test]
    fn single_closed_interval_counts_ninety_seconds() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let summary = DaySummary::compute(
            day(vec![
                (datetime!(2024-05-10 09:00:00 UTC), PunchStatus::In),
                (datetime!(2024-05-10 09:01:30 UTC), PunchStatus::Out),
            ]),
            &WorkTarget::ProductiveHours(8.0),
            now,
        )
        .unwrap();

        assert_eq!(summary.worked, Duration::seconds(90));
        assert_eq!(summary.remaining, Duration::seconds(8 * 3600 - 90));
        assert_eq!(summary.leave_time, now + summary.remaining);
        assert_eq!(summary.format, DurationFormat::HoursMinutesSeconds);
    }

    #[test]
    fn subsecond_remainders_are_truncated_per_interval() {
        let intervals = vec![
            Interval {
                in_time: datetime!(2024-05-10 09:00:00 UTC),
                out_time: Some(datetime!(2024-05-10 09:00:01.900 UTC)),
                location: "HQ".to_string(),
            },
            Interval {
                in_time: datetime!(2024-05-10 10:00:00 UTC),
                out_time: Some(datetime!(2024-05-10 10:00:01.900 UTC)),
                location: "HQ".to_string(),
            },
        ];

        assert_eq!(
            worked_duration(&intervals, datetime!(2024-05-10 12:00 UTC)),
            Duration::seconds(2)
        );
    }

    #[test]
    fn open_interval_runs_until_now() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let summary = DaySummary::compute(
            day(vec![
                (datetime!(2024-05-10 04:00 UTC), PunchStatus::In),
                (datetime!(2024-05-10 06:00 UTC), PunchStatus::Out),
                (datetime!(2024-05-10 07:00 UTC), PunchStatus::In),
            ]),
            &WorkTarget::Shift,
            now,
        )
        .unwrap();

        assert_eq!(summary.worked, Duration::hours(7));
        assert_eq!(summary.remaining, Duration::hours(1));
        assert_eq!(summary.leave_time, datetime!(2024-05-10 13:00 UTC));
        assert_eq!(summary.format, DurationFormat::HoursMinutes);
    }

    #[test]
    fn only_last_open_interval_runs() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let intervals = pair_punches(vec![
            PunchEvent::new(datetime!(2024-05-10 04:00 UTC), PunchStatus::In),
            PunchEvent::new(datetime!(2024-05-10 10:00 UTC), PunchStatus::In),
        ]);

        assert_eq!(worked_duration(&intervals, now), Duration::hours(2));
    }

    #[test]
    fn earlier_open_interval_runs_when_later_one_closed() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let intervals = pair_punches(vec![
            PunchEvent::new(datetime!(2024-05-10 04:00 UTC), PunchStatus::In),
            PunchEvent::new(datetime!(2024-05-10 05:00 UTC), PunchStatus::In),
            PunchEvent::new(datetime!(2024-05-10 06:00 UTC), PunchStatus::Out),
        ]);

        // 1h closed plus 04:00..12:00 running from the abandoned interval.
        assert_eq!(worked_duration(&intervals, now), Duration::hours(9));
    }

    #[test]
    fn future_punch_adds_no_running_time() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let intervals = pair_punches(vec![PunchEvent::new(
            datetime!(2024-05-10 13:00 UTC),
            PunchStatus::In,
        )]);

        assert_eq!(worked_duration(&intervals, now), Duration::ZERO);
    }

    #[test]
    fn remaining_clamps_to_zero_and_leave_time_is_now() {
        let now = datetime!(2024-05-10 14:00 UTC);
        let summary = DaySummary::compute(
            day(vec![
                (datetime!(2024-05-10 03:00 UTC), PunchStatus::In),
                (datetime!(2024-05-10 13:00 UTC), PunchStatus::Out),
            ]),
            &WorkTarget::Shift,
            now,
        )
        .unwrap();

        assert_eq!(summary.worked, Duration::hours(10));
        assert_eq!(summary.remaining, Duration::ZERO);
        assert_eq!(summary.leave_time, now);
    }

    #[test]
    fn exact_target_leaves_nothing_remaining() {
        let now = datetime!(2024-05-10 14:00 UTC);
        let summary = DaySummary::compute(
            day(vec![
                (datetime!(2024-05-10 04:00 UTC), PunchStatus::In),
                (datetime!(2024-05-10 12:00 UTC), PunchStatus::Out),
            ]),
            &WorkTarget::ProductiveHours(8.0),
            now,
        )
        .unwrap();

        assert_eq!(summary.worked, Duration::seconds(28_800));
        assert_eq!(summary.remaining, Duration::ZERO);
        assert_eq!(summary.leave_time, now);
    }

    #[test]
    fn oversized_target_fails_instead_of_overflowing() {
        let now = datetime!(2024-05-10 12:00 UTC);
        let punches = vec![(datetime!(2024-05-10 04:00 UTC), PunchStatus::In)];

        let productive = DaySummary::compute(
            day(punches.clone()),
            &WorkTarget::ProductiveHours(1e9),
            now,
        );
        assert!(matches!(productive, Err(AttendanceError::Unknown(_))));

        let shift = DaySummary::compute(day(punches).with_shift_hours(1e9), &WorkTarget::Shift, now);
        assert!(matches!(shift, Err(AttendanceError::Unknown(_))));
    }
}
