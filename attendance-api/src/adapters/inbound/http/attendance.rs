//! HTTP adapter for attendance summaries.
//!
//! Defines the factory trait for creating AttendanceService instances from a
//! request's bearer token. The concrete implementation lives in
//! `crate::factory` (the composition root).

use crate::domain::{models::AccessToken, ports::inbound::AttendanceService, AttendanceError};

/// Factory trait for creating an AttendanceService bound to one caller.
pub trait AttendanceServiceFactory: Send + Sync + 'static {
    /// Create a service that reads attendance with the given token.
    ///
    /// Must not touch the network; the only upstream call happens when the
    /// service is asked for a summary.
    fn create_service(
        &self,
        token: AccessToken,
    ) -> Result<Box<dyn AttendanceService>, AttendanceError>;
}
