//! Decision-engine handlers
//!
//! Fixture-backed: the rule evaluator itself runs elsewhere.

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use tradeguard_core::{LogsResponse, RulesResponse};

/// List decision rules
pub async fn list_decision_rules(State(state): State<AppState>) -> ApiResult<Json<RulesResponse>> {
    let rules = state.storage.decision_rules().await?;
    Ok(Json(RulesResponse { rules }))
}

/// List decision evaluation logs
pub async fn list_decision_logs(State(state): State<AppState>) -> ApiResult<Json<LogsResponse>> {
    let logs = state.storage.decision_logs().await?;
    Ok(Json(LogsResponse { logs }))
}
