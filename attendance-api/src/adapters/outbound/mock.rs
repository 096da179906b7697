//! In-memory attendance provider for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    adapters::inbound::http::AttendanceServiceFactory,
    domain::{
        models::{AccessToken, DayRecord},
        ports::{inbound::AttendanceService, outbound::AttendanceProvider},
        services::AttendanceServiceImpl,
        AttendanceError,
    },
};

/// Provider that returns fixed records or a fixed upstream failure.
#[derive(Clone)]
pub struct MockAttendanceProvider {
    response: Result<Vec<DayRecord>, (u16, String)>,
}

impl MockAttendanceProvider {
    pub fn returning(records: Vec<DayRecord>) -> Self {
        Self {
            response: Ok(records),
        }
    }

    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Err((status, body.into())),
        }
    }
}

#[async_trait]
impl AttendanceProvider for MockAttendanceProvider {
    async fn get_day_records(&self) -> Result<Vec<DayRecord>, AttendanceError> {
        match &self.response {
            Ok(records) => Ok(records.clone()),
            Err((status, body)) => Err(AttendanceError::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Factory handing out services backed by a [`MockAttendanceProvider`].
#[derive(Clone)]
pub struct MockServiceFactory {
    provider: MockAttendanceProvider,
    created: Arc<AtomicUsize>,
}

impl MockServiceFactory {
    pub fn new(provider: MockAttendanceProvider) -> Self {
        Self {
            provider,
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of services created, i.e. requests that got past validation.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl AttendanceServiceFactory for MockServiceFactory {
    fn create_service(
        &self,
        _token: AccessToken,
    ) -> Result<Box<dyn AttendanceService>, AttendanceError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(AttendanceServiceImpl::new(Arc::new(
            self.provider.clone(),
        ))))
    }
}
