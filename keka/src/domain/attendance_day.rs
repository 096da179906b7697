use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// One calendar day of attendance data, as returned by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AttendanceDay {
    /// Usually a full timestamp such as `2024-05-10T00:00:00`.
    pub attendance_date: Option<String>,
    /// Hours the shift requires, if Keka knows it.
    pub shift_effective_duration: Option<f64>,
    pub time_entries: Vec<TimeEntry>,
}

impl From<RawAttendanceDay> for AttendanceDay {
    fn from(raw_day: RawAttendanceDay) -> Self {
        // An empty `timeEntries` list is still authoritative; only a missing one
        // falls back to the original punches.
        let time_entries = raw_day
            .time_entries
            .or(raw_day.original_time_entries)
            .unwrap_or_default();

        AttendanceDay {
            attendance_date: raw_day.attendance_date,
            shift_effective_duration: raw_day.shift_effective_duration,
            time_entries,
        }
    }
}

/// A single punch as Keka reports it. `punch_status` is 0 for IN and 1 for OUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub punch_status: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub premise_name: Option<String>,
}

/// A value of the wrong shape reads as absent, so one odd punch cannot fail
/// the whole summary.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

// Raw types, these are the types that are returned from the Keka API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttendanceDay {
    pub attendance_date: Option<String>,
    pub shift_effective_duration: Option<f64>,
    pub time_entries: Option<Vec<TimeEntry>>,
    pub original_time_entries: Option<Vec<TimeEntry>>,
}
