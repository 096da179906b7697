use time::OffsetDateTime;

/// Location reported for intervals whose IN punch carries no premise.
pub const DEFAULT_LOCATION: &str = "Surat-414";

/// Direction of a punch. Keka encodes IN as 0 and OUT as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchStatus {
    In,
    Out,
    Other(i64),
}

impl From<i64> for PunchStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => PunchStatus::In,
            1 => PunchStatus::Out,
            other => PunchStatus::Other(other),
        }
    }
}

/// A single clock-in or clock-out action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchEvent {
    pub timestamp: OffsetDateTime,
    pub status: PunchStatus,
    pub premise_name: Option<String>,
}

impl PunchEvent {
    pub fn new(timestamp: OffsetDateTime, status: PunchStatus) -> Self {
        Self {
            timestamp,
            status,
            premise_name: None,
        }
    }

    pub fn with_premise(mut self, premise_name: impl Into<String>) -> Self {
        self.premise_name = Some(premise_name.into());
        self
    }
}

/// An IN punch and, once it happened, the OUT punch that closed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub in_time: OffsetDateTime,
    pub out_time: Option<OffsetDateTime>,
    pub location: String,
}

impl Interval {
    fn open(event: PunchEvent) -> Self {
        let location = event
            .premise_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        Self {
            in_time: event.timestamp,
            out_time: None,
            location,
        }
    }

    /// True while no OUT punch has closed the interval.
    pub fn is_missing(&self) -> bool {
        self.out_time.is_none()
    }
}

/// Pairs punches into intervals, ordered by their IN time.
///
/// Punches are stably sorted by timestamp first. Only the most recently opened
/// interval can be closed: an IN while another interval is open leaves the
/// older one open for good, and an OUT with nothing open is dropped.
pub fn pair_punches(mut events: Vec<PunchEvent>) -> Vec<Interval> {
    events.sort_by_key(|event| event.timestamp);

    let (intervals, _) = events.into_iter().fold(
        (Vec::<Interval>::new(), None::<usize>),
        |(mut intervals, open), event| match event.status {
            PunchStatus::In => {
                intervals.push(Interval::open(event));
                let opened = intervals.len() - 1;
                (intervals, Some(opened))
            }
            PunchStatus::Out => {
                if let Some(index) = open {
                    intervals[index].out_time = Some(event.timestamp);
                }
                (intervals, None)
            }
            PunchStatus::Other(_) => (intervals, open),
        },
    );

    intervals
}
