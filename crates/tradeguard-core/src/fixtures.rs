//! Seed data for the decision-engine and monitoring views.
//!
//! These are display fixtures, not computed state: the real rule evaluator
//! and monitors live in a separate system, and the dashboards render a fixed
//! snapshot of their output. Timestamps are anchored to a caller-supplied
//! `now` so tests stay deterministic.

use crate::status::{AlertSeverity, DecisionOutcome};
use crate::types::{DecisionLog, DecisionRule, MonitoringAlert, MonitoringSchedule};
use chrono::{DateTime, Duration, Utc};

pub fn decision_rules(now: DateTime<Utc>) -> Vec<DecisionRule> {
    vec![
        DecisionRule {
            id: "rule-velocity".to_string(),
            name: "Card velocity limit".to_string(),
            description: "Decline more than 5 card attempts from one device within 10 minutes"
                .to_string(),
            outcome: DecisionOutcome::Decline,
            priority: 10,
            enabled: true,
            created_at: now - Duration::days(90),
        },
        DecisionRule {
            id: "rule-high-value".to_string(),
            name: "High-value manual review".to_string(),
            description: "Route first-time sellers above £2,500 to manual review".to_string(),
            outcome: DecisionOutcome::Review,
            priority: 20,
            enabled: true,
            created_at: now - Duration::days(60),
        },
        DecisionRule {
            id: "rule-verified-repeat".to_string(),
            name: "Verified repeat counterparty".to_string(),
            description: "Approve repeat transactions between KYC-verified counterparties"
                .to_string(),
            outcome: DecisionOutcome::Approve,
            priority: 30,
            enabled: true,
            created_at: now - Duration::days(45),
        },
        DecisionRule {
            id: "rule-geo-mismatch".to_string(),
            name: "Geolocation mismatch".to_string(),
            description: "Review payments where card country and device country disagree"
                .to_string(),
            outcome: DecisionOutcome::Review,
            priority: 40,
            enabled: false,
            created_at: now - Duration::days(14),
        },
    ]
}

pub fn decision_logs(now: DateTime<Utc>) -> Vec<DecisionLog> {
    vec![
        DecisionLog {
            id: "log-7231".to_string(),
            rule_id: "rule-velocity".to_string(),
            subject: "txn 58a1 / device 9f30".to_string(),
            outcome: DecisionOutcome::Decline,
            score: 92,
            decided_at: now - Duration::minutes(12),
        },
        DecisionLog {
            id: "log-7230".to_string(),
            rule_id: "rule-high-value".to_string(),
            subject: "txn 58a0 / seller 4c11".to_string(),
            outcome: DecisionOutcome::Review,
            score: 61,
            decided_at: now - Duration::minutes(34),
        },
        DecisionLog {
            id: "log-7229".to_string(),
            rule_id: "rule-verified-repeat".to_string(),
            subject: "txn 589f / buyer 77b2".to_string(),
            outcome: DecisionOutcome::Approve,
            score: 8,
            decided_at: now - Duration::hours(2),
        },
        DecisionLog {
            id: "log-7228".to_string(),
            rule_id: "rule-verified-repeat".to_string(),
            subject: "txn 589e / buyer 1d09".to_string(),
            outcome: DecisionOutcome::Approve,
            score: 11,
            decided_at: now - Duration::hours(3),
        },
    ]
}

pub fn monitoring_alerts(now: DateTime<Utc>) -> Vec<MonitoringAlert> {
    vec![
        MonitoringAlert {
            id: "alert-2201".to_string(),
            title: "Chargeback rate above 0.9% for card rail".to_string(),
            severity: AlertSeverity::Critical,
            source: "chargeback-monitor".to_string(),
            acknowledged: false,
            raised_at: now - Duration::minutes(18),
        },
        MonitoringAlert {
            id: "alert-2199".to_string(),
            title: "Sanctions list sync behind by 26 hours".to_string(),
            severity: AlertSeverity::High,
            source: "watchlist-sync".to_string(),
            acknowledged: false,
            raised_at: now - Duration::hours(5),
        },
        MonitoringAlert {
            id: "alert-2195".to_string(),
            title: "KYC provider latency p95 above 4s".to_string(),
            severity: AlertSeverity::Medium,
            source: "kyc-gateway".to_string(),
            acknowledged: true,
            raised_at: now - Duration::hours(9),
        },
        MonitoringAlert {
            id: "alert-2190".to_string(),
            title: "Nightly PEP screen completed with 3 soft matches".to_string(),
            severity: AlertSeverity::Low,
            source: "pep-screen".to_string(),
            acknowledged: true,
            raised_at: now - Duration::days(1),
        },
    ]
}

pub fn monitoring_schedules(now: DateTime<Utc>) -> Vec<MonitoringSchedule> {
    vec![
        MonitoringSchedule {
            id: "sched-pep".to_string(),
            name: "PEP and sanctions re-screen".to_string(),
            cadence: "daily".to_string(),
            last_run_at: Some(now - Duration::days(1)),
            next_run_at: now + Duration::hours(13),
            enabled: true,
        },
        MonitoringSchedule {
            id: "sched-kyb-refresh".to_string(),
            name: "KYB registry refresh".to_string(),
            cadence: "weekly".to_string(),
            last_run_at: Some(now - Duration::days(4)),
            next_run_at: now + Duration::days(3),
            enabled: true,
        },
        MonitoringSchedule {
            id: "sched-chargeback".to_string(),
            name: "Chargeback ratio rollup".to_string(),
            cadence: "hourly".to_string(),
            last_run_at: Some(now - Duration::minutes(42)),
            next_run_at: now + Duration::minutes(18),
            enabled: true,
        },
        MonitoringSchedule {
            id: "sched-model-drift".to_string(),
            name: "Risk model drift check".to_string(),
            cadence: "weekly".to_string(),
            last_run_at: None,
            next_run_at: now + Duration::days(6),
            enabled: false,
        },
    ]
}
