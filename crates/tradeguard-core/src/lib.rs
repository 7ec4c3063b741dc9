//! Tradeguard core domain layer.
//!
//! This crate holds the typed records exchanged with the Tradeguard API, the
//! status/severity classification tables shared by the CRM, decision-engine,
//! and monitoring views, transaction summary reduction, and submission
//! validation. Everything here is pure and synchronous; the HTTP surfaces
//! live in `tradeguard-client` and `tradeguard-service`.

#![deny(unsafe_code)]

pub mod amount;
pub mod error;
pub mod fixtures;
pub mod stats;
pub mod status;
pub mod types;
pub mod validate;

pub use amount::Amount;
pub use error::{CoreError, ValidationError};
pub use stats::{summarize, TransactionSummary};
pub use status::{
    classify_outcome, classify_severity, classify_status, AlertSeverity, DecisionOutcome,
    StatusDisplay, TransactionStatus,
};
pub use types::{
    AlertsResponse, Contact, ContactFormSubmission, ContactsPage, CrmAnalytics, DecisionLog,
    DecisionRule, LeadsPage, Lead, LogsResponse, MessageResponse, MonitoringAlert,
    MonitoringSchedule, NewTransaction, OpportunitiesPage, Opportunity, PageQuery, Pagination,
    RulesResponse, SchedulesResponse, Transaction, TransactionsPage,
};
pub use validate::{is_valid_email, validate_contact_form, validate_new_transaction};
