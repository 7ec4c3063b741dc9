//! End-to-end coverage of the list, analytics, and fixture endpoints.

mod common;

use tradeguard_client::{ClientError, TradeguardClient};
use tradeguard_core::{
    summarize, AlertSeverity, Amount, DecisionOutcome, NewTransaction, PageQuery,
    TransactionStatus,
};

#[tokio::test]
async fn health_reports_ok() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let status = client.health_check().await.unwrap();
    assert_eq!(status.status, "ok");
    assert!(!status.version.is_empty());
}

#[tokio::test]
async fn transaction_listing_feeds_the_summary() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let page = client.list_transactions(PageQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total, 4);

    // Seeded statuses: escrow, completed, disputed, kyc_required.
    let summary = summarize(&page.transactions);
    assert_eq!(summary.active_count, 1);
    assert_eq!(summary.completed_count, 1);
    assert_eq!(summary.escrow_total_display(), "£26,350.00");
}

#[tokio::test]
async fn created_transactions_start_pending_and_lead_the_listing() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let created = client
        .create_transaction(&NewTransaction {
            title: "Espresso machine".to_string(),
            description: "Commercial dual boiler".to_string(),
            amount: Amount::from_major(1_450),
            currency: "GBP".to_string(),
            seller_email: "roaster@example.com".to_string(),
            category: "catering".to_string(),
            delivery_timeframe: "7 days".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.status, TransactionStatus::Pending);
    assert_eq!(created.amount, Amount::from_major(1_450));

    let page = client.list_transactions(PageQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.transactions[0].id, created.id);
}

#[tokio::test]
async fn invalid_transaction_requests_never_reach_the_wire() {
    // Nothing listens here; a dispatched request would surface as an HTTP
    // error rather than a validation error.
    let client = TradeguardClient::new("http://127.0.0.1:9").unwrap();

    let err = client
        .create_transaction(&NewTransaction {
            title: "Espresso machine".to_string(),
            description: String::new(),
            amount: Amount::from_major(1_450),
            currency: "BTC".to_string(),
            seller_email: "roaster@example.com".to_string(),
            category: "catering".to_string(),
            delivery_timeframe: "7 days".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn pagination_defaults_and_clamping_are_applied_server_side() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let page = client
        .list_contacts(PageQuery::new(1, 500))
        .await
        .unwrap();
    assert_eq!(page.pagination.limit, 100, "limit must clamp to 100");
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 1);

    let beyond = client.list_contacts(PageQuery::new(5, 2)).await.unwrap();
    assert!(beyond.contacts.is_empty());
    assert_eq!(beyond.pagination.page, 5);
    assert_eq!(beyond.pagination.total, 3);
}

#[tokio::test]
async fn crm_endpoints_serve_seeded_records() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let leads = client.list_leads(PageQuery::default()).await.unwrap();
    assert_eq!(leads.pagination.total, 2);

    let opportunities = client
        .list_opportunities(PageQuery::default())
        .await
        .unwrap();
    assert_eq!(opportunities.pagination.total, 3);

    let analytics = client.crm_analytics().await.unwrap();
    assert_eq!(analytics.total_contacts, 3);
    assert_eq!(analytics.open_opportunity_value, Amount::from_major(42_000));
    assert_eq!(analytics.won_opportunity_value, Amount::from_major(12_500));
}

#[tokio::test]
async fn decision_and_monitoring_fixtures_are_served() {
    let base_url = common::spawn_app().await;
    let client = TradeguardClient::new(&base_url).unwrap();

    let rules = client.list_decision_rules().await.unwrap();
    assert_eq!(rules.rules.len(), 4);
    assert!(rules
        .rules
        .iter()
        .any(|rule| rule.outcome == DecisionOutcome::Decline));

    let logs = client.list_decision_logs().await.unwrap();
    assert_eq!(logs.logs.len(), 4);

    let alerts = client.list_monitoring_alerts().await.unwrap();
    let critical = alerts
        .alerts
        .iter()
        .find(|alert| alert.severity == AlertSeverity::Critical)
        .expect("a critical alert is seeded");
    assert_eq!(critical.severity.display().text, "Critical");

    let schedules = client.list_monitoring_schedules().await.unwrap();
    assert_eq!(schedules.schedules.len(), 4);
}

#[tokio::test]
async fn unknown_paths_return_not_found() {
    let base_url = common::spawn_app().await;

    let response = reqwest::get(format!("{base_url}/api/no-such-endpoint"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
