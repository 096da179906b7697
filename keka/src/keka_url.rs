/// Attendance summary endpoint of the Keka instance this relay talks to.
pub const DEFAULT_ATTENDANCE_SUMMARY_URL: &str =
    "https://triveniglobalsoft.keka.com/k/attendance/api/mytime/attendance/summary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KekaURL(String);

impl AsRef<str> for KekaURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for KekaURL {
    fn default() -> Self {
        Self(DEFAULT_ATTENDANCE_SUMMARY_URL.to_string())
    }
}

impl KekaURL {
    /// Creates a KekaURL, trimming surrounding whitespace and any trailing slash.
    pub fn new(url: impl AsRef<str>) -> Self {
        Self(url.as_ref().trim().trim_end_matches('/').to_string())
    }
}
