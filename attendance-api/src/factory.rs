//! Composition root: concrete factories for creating service instances.
//!
//! This is the ONLY place that imports concrete outbound adapters and provider types.

use std::sync::Arc;

use crate::{
    adapters::{
        inbound::http::AttendanceServiceFactory,
        outbound::keka::{map_keka_error, KekaAdapter},
    },
    config::UpstreamSettings,
    domain::{
        models::AccessToken, ports::inbound::AttendanceService,
        services::AttendanceServiceImpl, AttendanceError,
    },
};

/// Concrete factory that creates Keka-backed AttendanceService instances.
pub struct KekaServiceFactory {
    http: reqwest::Client,
    url: keka::KekaURL,
    user_agent: String,
}

impl KekaServiceFactory {
    pub fn new(settings: &UpstreamSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: keka::KekaURL::new(&settings.url),
            user_agent: settings.user_agent.clone(),
        }
    }
}

impl AttendanceServiceFactory for KekaServiceFactory {
    fn create_service(
        &self,
        token: AccessToken,
    ) -> Result<Box<dyn AttendanceService>, AttendanceError> {
        let credentials = keka::Credentials::bearer(token.as_str()).map_err(map_keka_error)?;
        let client = keka::KekaClient::new(self.http.clone(), self.url.clone(), credentials)
            .with_user_agent(&self.user_agent);

        let adapter = KekaAdapter::new(client);
        let service = AttendanceServiceImpl::new(Arc::new(adapter));

        Ok(Box::new(service))
    }
}
