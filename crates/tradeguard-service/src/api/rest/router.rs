//! API router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        // CRM
        .route("/crm/contacts", get(handlers::list_contacts))
        .route("/crm/leads", get(handlers::list_leads))
        .route("/crm/opportunities", get(handlers::list_opportunities))
        .route("/crm/analytics", get(handlers::crm_analytics))
        // Transactions
        .route("/transactions", get(handlers::list_transactions))
        .route("/transactions", post(handlers::create_transaction))
        // Contact form
        .route("/contact", post(handlers::submit_contact))
        // Decision engine (fixture-backed)
        .route("/decisions/rules", get(handlers::list_decision_rules))
        .route("/decisions/logs", get(handlers::list_decision_logs))
        // Monitoring (fixture-backed)
        .route("/monitoring/alerts", get(handlers::list_monitoring_alerts))
        .route(
            "/monitoring/schedules",
            get(handlers::list_monitoring_schedules),
        );

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
