use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::{
    domain::{AttendanceDay, RawAttendanceDay},
    KekaURL,
};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Bearer token used to call Keka on behalf of a user.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Fails with [`KekaFetchError::MissingToken`] if the token is empty.
    pub fn bearer(token: impl Into<String>) -> Result<Self, KekaFetchError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(KekaFetchError::MissingToken);
        }

        Ok(Self { token })
    }

    fn as_authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("token", &"***").finish()
    }
}

pub struct KekaClient {
    http: reqwest::Client,
    url: KekaURL,
    user_agent: String,
    credentials: Credentials,
}

impl KekaClient {
    pub fn new(http: reqwest::Client, url: KekaURL, credentials: Credentials) -> Self {
        Self {
            http,
            url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            credentials,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    async fn fetch<T: DeserializeOwned>(&self) -> Result<T, KekaFetchError> {
        let resp = self
            .http
            .get(self.url.as_ref())
            .header(AUTHORIZATION, self.credentials.as_authorization_header())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| KekaFetchError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| KekaFetchError::ResponseError(e.to_string()))?;
            tracing::warn!(status = status.as_u16(), "Keka responded with an error");
            return Err(KekaFetchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            KekaFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Fetches the attendance summary, one entry per calendar day.
    pub async fn fetch_attendance_summary(&self) -> Result<Vec<AttendanceDay>, KekaFetchError> {
        let response: KekaDataResponse<RawAttendanceDay> = self.fetch().await?;
        let days = response
            .into_rows()
            .into_iter()
            .map(AttendanceDay::from)
            .collect::<Vec<_>>();

        tracing::debug!(days = days.len(), "Fetched attendance summary");
        Ok(days)
    }
}

#[derive(Error, Debug)]
pub enum KekaFetchError {
    #[error("Token is required")]
    MissingToken,
    #[error("Keka API Error ({status})")]
    Upstream { status: u16, body: String },
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

/// Envelope Keka wraps its payloads in. `data` may be missing or null.
#[derive(Debug, Deserialize)]
pub struct KekaDataResponse<T> {
    pub data: Option<Vec<T>>,
}

impl<T> KekaDataResponse<T> {
    pub fn into_rows(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
