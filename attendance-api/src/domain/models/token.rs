use std::fmt;

use crate::domain::AttendanceError;

/// A non-empty bearer token supplied by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates a token taken from a request body.
    pub fn parse(token: Option<String>) -> Result<Self, AttendanceError> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(Self(token)),
            _ => Err(AttendanceError::MissingToken),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
