//! CRM handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{
    extract::{Query, State},
    Json,
};
use tradeguard_core::{
    ContactsPage, CrmAnalytics, LeadsPage, OpportunitiesPage, PageQuery, Pagination,
};

/// List CRM contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<ContactsPage>> {
    let (page, limit) = (query.page(), query.limit());
    let (contacts, total) = state.storage.list_contacts(page, limit).await?;

    Ok(Json(ContactsPage {
        contacts,
        pagination: Pagination::for_page(page, limit, total),
    }))
}

/// List CRM leads
pub async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<LeadsPage>> {
    let (page, limit) = (query.page(), query.limit());
    let (leads, total) = state.storage.list_leads(page, limit).await?;

    Ok(Json(LeadsPage {
        leads,
        pagination: Pagination::for_page(page, limit, total),
    }))
}

/// List CRM opportunities
pub async fn list_opportunities(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<OpportunitiesPage>> {
    let (page, limit) = (query.page(), query.limit());
    let (opportunities, total) = state.storage.list_opportunities(page, limit).await?;

    Ok(Json(OpportunitiesPage {
        opportunities,
        pagination: Pagination::for_page(page, limit, total),
    }))
}

/// CRM summary counters
pub async fn crm_analytics(State(state): State<AppState>) -> ApiResult<Json<CrmAnalytics>> {
    Ok(Json(state.storage.crm_analytics().await?))
}
