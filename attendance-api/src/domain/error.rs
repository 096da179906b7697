use thiserror::Error;

/// Errors that can occur while summarizing attendance.
#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("Token is required")]
    MissingToken,
    #[error("productiveHours must be a positive number")]
    InvalidTarget,
    #[error("Keka API Error")]
    Upstream { status: u16, body: String },
    #[error("failed to render time: {0}")]
    Format(#[from] time::error::Format),
    #[error("{0}")]
    Unknown(String),
}

impl AttendanceError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}
