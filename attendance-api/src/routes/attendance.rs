use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{AttendanceResponse, AttendanceSummaryResponse, NoRecordResponse},
    app_state::AppState,
    domain::{
        models::{AccessToken, WorkTarget},
        AttendanceError,
    },
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/attendance", post(get_attendance))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    token: Option<String>,
    /// Number or numeric string; absent or null selects the shift target.
    productive_hours: Option<Value>,
}

#[instrument(name = "get_attendance", skip_all)]
pub async fn get_attendance(
    State(app_state): State<AppState>,
    payload: Result<Json<AttendancePayload>, JsonRejection>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let token = AccessToken::parse(body.token)?;
    let target = parse_target(body.productive_hours)?;

    let service = app_state.attendance_factory.create_service(token)?;

    let response = match service.summarize_today(&target).await? {
        Some(summary) => AttendanceResponse::Summary(AttendanceSummaryResponse::try_from(summary)?),
        None => AttendanceResponse::NoRecord(NoRecordResponse::default()),
    };

    Ok(Json(response))
}

fn parse_target(productive_hours: Option<Value>) -> Result<WorkTarget, AttendanceError> {
    let hours = match productive_hours {
        None | Some(Value::Null) => return Ok(WorkTarget::Shift),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    hours
        .ok_or(AttendanceError::InvalidTarget)
        .and_then(WorkTarget::productive_hours)
}
