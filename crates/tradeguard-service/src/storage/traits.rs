//! Storage traits

use crate::error::StorageError;
use async_trait::async_trait;
use tradeguard_core::{
    Contact, ContactFormSubmission, CrmAnalytics, DecisionLog, DecisionRule, Lead,
    MonitoringAlert, MonitoringSchedule, Opportunity, Transaction,
};

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence surface the API handlers are written against.
///
/// Paginated listings return the requested page slice together with the
/// total record count so handlers can build the pagination envelope.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_contacts(&self, page: u32, limit: u32) -> StorageResult<(Vec<Contact>, u64)>;
    async fn list_leads(&self, page: u32, limit: u32) -> StorageResult<(Vec<Lead>, u64)>;
    async fn list_opportunities(
        &self,
        page: u32,
        limit: u32,
    ) -> StorageResult<(Vec<Opportunity>, u64)>;
    async fn crm_analytics(&self) -> StorageResult<CrmAnalytics>;

    async fn list_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> StorageResult<(Vec<Transaction>, u64)>;
    async fn insert_transaction(&self, transaction: Transaction) -> StorageResult<()>;

    async fn record_contact_submission(
        &self,
        submission: ContactFormSubmission,
    ) -> StorageResult<()>;

    async fn decision_rules(&self) -> StorageResult<Vec<DecisionRule>>;
    async fn decision_logs(&self) -> StorageResult<Vec<DecisionLog>>;
    async fn monitoring_alerts(&self) -> StorageResult<Vec<MonitoringAlert>>;
    async fn monitoring_schedules(&self) -> StorageResult<Vec<MonitoringSchedule>>;
}
