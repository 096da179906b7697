use std::sync::Arc;

use crate::adapters::inbound::http::AttendanceServiceFactory;

#[derive(Clone)]
pub struct AppState {
    pub attendance_factory: Arc<dyn AttendanceServiceFactory>,
}

impl AppState {
    pub fn new(attendance_factory: Arc<dyn AttendanceServiceFactory>) -> Self {
        Self { attendance_factory }
    }
}
