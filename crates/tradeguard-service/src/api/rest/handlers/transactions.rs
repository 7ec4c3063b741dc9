//! Transaction handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use tradeguard_core::{
    validate_new_transaction, NewTransaction, PageQuery, Pagination, Transaction,
    TransactionsPage,
};

/// List transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<TransactionsPage>> {
    let (page, limit) = (query.page(), query.limit());
    let (transactions, total) = state.storage.list_transactions(page, limit).await?;

    Ok(Json(TransactionsPage {
        transactions,
        pagination: Pagination::for_page(page, limit, total),
    }))
}

/// Create a transaction
///
/// New records always start in `pending`; every later status change belongs
/// to the settlement pipeline, not this API.
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    validate_new_transaction(&request)?;

    let transaction = Transaction::new(
        request.title.trim(),
        request.amount,
        request.currency.trim().to_ascii_uppercase(),
        "buyer-session",
        request.seller_email.trim(),
        Utc::now(),
    )
    .with_description(request.description.trim())
    .with_category(request.category.trim());

    state.storage.insert_transaction(transaction.clone()).await?;

    tracing::info!(transaction_id = %transaction.id, "Created transaction");

    Ok(Json(transaction))
}
