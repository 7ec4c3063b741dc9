//! Monitoring handlers
//!
//! Fixture-backed: the monitors themselves run elsewhere.

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use tradeguard_core::{AlertsResponse, SchedulesResponse};

/// List monitoring alerts
pub async fn list_monitoring_alerts(
    State(state): State<AppState>,
) -> ApiResult<Json<AlertsResponse>> {
    let alerts = state.storage.monitoring_alerts().await?;
    Ok(Json(AlertsResponse { alerts }))
}

/// List monitoring schedules
pub async fn list_monitoring_schedules(
    State(state): State<AppState>,
) -> ApiResult<Json<SchedulesResponse>> {
    let schedules = state.storage.monitoring_schedules().await?;
    Ok(Json(SchedulesResponse { schedules }))
}
