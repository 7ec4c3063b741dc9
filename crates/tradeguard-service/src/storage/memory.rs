//! In-memory storage implementation

use super::traits::{Storage, StorageResult};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tradeguard_core::{
    fixtures, Amount, Contact, ContactFormSubmission, CrmAnalytics, DecisionLog, DecisionRule,
    Lead, MonitoringAlert, MonitoringSchedule, Opportunity, Transaction, TransactionStatus,
};

/// In-memory storage for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    contacts: Arc<RwLock<Vec<Contact>>>,
    leads: Arc<RwLock<Vec<Lead>>>,
    opportunities: Arc<RwLock<Vec<Opportunity>>>,
    transactions: Arc<RwLock<Vec<Transaction>>>,
    submissions: Arc<RwLock<Vec<ContactFormSubmission>>>,
    rules: Arc<RwLock<Vec<DecisionRule>>>,
    logs: Arc<RwLock<Vec<DecisionLog>>>,
    alerts: Arc<RwLock<Vec<MonitoringAlert>>>,
    schedules: Arc<RwLock<Vec<MonitoringSchedule>>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with demo CRM/transaction data and the
    /// decision/monitoring fixtures, anchored at `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(seed_contacts(now))),
            leads: Arc::new(RwLock::new(seed_leads(now))),
            opportunities: Arc::new(RwLock::new(seed_opportunities(now))),
            transactions: Arc::new(RwLock::new(seed_transactions(now))),
            submissions: Arc::new(RwLock::new(Vec::new())),
            rules: Arc::new(RwLock::new(fixtures::decision_rules(now))),
            logs: Arc::new(RwLock::new(fixtures::decision_logs(now))),
            alerts: Arc::new(RwLock::new(fixtures::monitoring_alerts(now))),
            schedules: Arc::new(RwLock::new(fixtures::monitoring_schedules(now))),
        }
    }

    /// Number of contact submissions recorded so far.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

fn seed_contacts(now: DateTime<Utc>) -> Vec<Contact> {
    vec![
        Contact {
            id: "contact-1".to_string(),
            first_name: "Priya".to_string(),
            last_name: "Nair".to_string(),
            email: "priya.nair@vendoro.example".to_string(),
            phone: Some("+44 20 7946 0101".to_string()),
            company: Some("Vendoro Marketplace".to_string()),
            status: "customer".to_string(),
            created_at: now - Duration::days(120),
        },
        Contact {
            id: "contact-2".to_string(),
            first_name: "Marcus".to_string(),
            last_name: "Webb".to_string(),
            email: "m.webb@freightline.example".to_string(),
            phone: None,
            company: Some("Freightline Ltd".to_string()),
            status: "prospect".to_string(),
            created_at: now - Duration::days(30),
        },
        Contact {
            id: "contact-3".to_string(),
            first_name: "Sofia".to_string(),
            last_name: "Keller".to_string(),
            email: "sofia@kellerantiques.example".to_string(),
            phone: Some("+44 161 496 0222".to_string()),
            company: None,
            status: "customer".to_string(),
            created_at: now - Duration::days(7),
        },
    ]
}

fn seed_leads(now: DateTime<Utc>) -> Vec<Lead> {
    vec![
        Lead {
            id: "lead-1".to_string(),
            name: "Harbour Autos".to_string(),
            email: "ops@harbourautos.example".to_string(),
            company: Some("Harbour Autos".to_string()),
            source: "pricing-page".to_string(),
            status: "new".to_string(),
            value: Some(Amount::from_major(18_000)),
            created_at: now - Duration::days(2),
        },
        Lead {
            id: "lead-2".to_string(),
            name: "Nomad Rentals".to_string(),
            email: "hello@nomadrentals.example".to_string(),
            company: None,
            source: "contact-form".to_string(),
            status: "qualified".to_string(),
            value: None,
            created_at: now - Duration::days(11),
        },
    ]
}

fn seed_opportunities(now: DateTime<Utc>) -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "opp-1".to_string(),
            title: "Vendoro escrow rollout".to_string(),
            contact_id: Some("contact-1".to_string()),
            stage: "proposal".to_string(),
            amount: Amount::from_major(42_000),
            close_date: Some(now + Duration::days(21)),
            created_at: now - Duration::days(40),
        },
        Opportunity {
            id: "opp-2".to_string(),
            title: "Freightline KYB screening".to_string(),
            contact_id: Some("contact-2".to_string()),
            stage: "won".to_string(),
            amount: Amount::from_major(12_500),
            close_date: Some(now - Duration::days(3)),
            created_at: now - Duration::days(25),
        },
        Opportunity {
            id: "opp-3".to_string(),
            title: "Keller dispute cover".to_string(),
            contact_id: Some("contact-3".to_string()),
            stage: "lost".to_string(),
            amount: Amount::from_major(6_000),
            close_date: None,
            created_at: now - Duration::days(60),
        },
    ]
}

fn seed_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction::new(
            "1967 Jaguar E-Type restoration",
            Amount::from_major(24_500),
            "GBP",
            "buyer-a118",
            "seller-f204",
            now - Duration::days(12),
        )
        .with_category("vehicles")
        .with_status(TransactionStatus::Escrow),
        Transaction::new(
            "Refurbished MacBook batch",
            Amount::from_major(5_200),
            "GBP",
            "buyer-c771",
            "seller-f204",
            now - Duration::days(9),
        )
        .with_category("electronics")
        .with_status(TransactionStatus::Completed),
        Transaction::new(
            "Victorian writing desk",
            Amount::from_major(1_850),
            "GBP",
            "buyer-a118",
            "seller-b930",
            now - Duration::days(4),
        )
        .with_category("antiques")
        .with_status(TransactionStatus::Disputed),
        Transaction::new(
            "Wholesale coffee contract",
            Amount::from_major(9_400),
            "GBP",
            "buyer-d402",
            "seller-e556",
            now - Duration::days(1),
        )
        .with_category("food-and-drink")
        .with_status(TransactionStatus::KycRequired),
    ]
}

fn page_slice<T: Clone>(items: &[T], page: u32, limit: u32) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    let slice = items
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();
    (slice, total)
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_contacts(&self, page: u32, limit: u32) -> StorageResult<(Vec<Contact>, u64)> {
        let contacts = self.contacts.read().await;
        Ok(page_slice(&contacts, page, limit))
    }

    async fn list_leads(&self, page: u32, limit: u32) -> StorageResult<(Vec<Lead>, u64)> {
        let leads = self.leads.read().await;
        Ok(page_slice(&leads, page, limit))
    }

    async fn list_opportunities(
        &self,
        page: u32,
        limit: u32,
    ) -> StorageResult<(Vec<Opportunity>, u64)> {
        let opportunities = self.opportunities.read().await;
        Ok(page_slice(&opportunities, page, limit))
    }

    async fn crm_analytics(&self) -> StorageResult<CrmAnalytics> {
        let contacts = self.contacts.read().await;
        let leads = self.leads.read().await;
        let opportunities = self.opportunities.read().await;

        let open_opportunity_value = opportunities
            .iter()
            .filter(|o| o.is_open())
            .map(|o| o.amount)
            .sum();
        let won_opportunity_value = opportunities
            .iter()
            .filter(|o| o.is_won())
            .map(|o| o.amount)
            .sum();

        Ok(CrmAnalytics {
            total_contacts: contacts.len() as u64,
            total_leads: leads.len() as u64,
            total_opportunities: opportunities.len() as u64,
            open_opportunity_value,
            won_opportunity_value,
        })
    }

    async fn list_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> StorageResult<(Vec<Transaction>, u64)> {
        let transactions = self.transactions.read().await;
        Ok(page_slice(&transactions, page, limit))
    }

    async fn insert_transaction(&self, transaction: Transaction) -> StorageResult<()> {
        let mut transactions = self.transactions.write().await;
        transactions.insert(0, transaction);
        Ok(())
    }

    async fn record_contact_submission(
        &self,
        submission: ContactFormSubmission,
    ) -> StorageResult<()> {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission);
        Ok(())
    }

    async fn decision_rules(&self) -> StorageResult<Vec<DecisionRule>> {
        Ok(self.rules.read().await.clone())
    }

    async fn decision_logs(&self) -> StorageResult<Vec<DecisionLog>> {
        Ok(self.logs.read().await.clone())
    }

    async fn monitoring_alerts(&self) -> StorageResult<Vec<MonitoringAlert>> {
        Ok(self.alerts.read().await.clone())
    }

    async fn monitoring_schedules(&self) -> StorageResult<Vec<MonitoringSchedule>> {
        Ok(self.schedules.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.timestamp_opt(1_754_000_000, 0).single().unwrap()
    }

    #[tokio::test]
    async fn seeded_store_serves_fixture_data() {
        let storage = InMemoryStorage::seeded(anchor());

        let (contacts, total) = storage.list_contacts(1, 20).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(contacts.len(), 3);

        assert_eq!(storage.decision_rules().await.unwrap().len(), 4);
        assert_eq!(storage.monitoring_alerts().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn pagination_slices_and_reports_totals() {
        let storage = InMemoryStorage::seeded(anchor());

        let (page, total) = storage.list_contacts(1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(total, 3);

        let (page, total) = storage.list_contacts(2, 2).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(total, 3);

        let (page, _) = storage.list_contacts(9, 2).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn inserted_transactions_lead_the_listing() {
        let storage = InMemoryStorage::seeded(anchor());
        let tx = Transaction::new(
            "New listing",
            Amount::from_major(75),
            "GBP",
            "buyer-x",
            "seller-y",
            anchor(),
        );
        let id = tx.id.clone();
        storage.insert_transaction(tx).await.unwrap();

        let (page, total) = storage.list_transactions(1, 20).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(page[0].id, id);
    }

    #[tokio::test]
    async fn contact_submissions_are_recorded() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.submission_count().await, 0);

        let submission =
            ContactFormSubmission::new("Ada", "Lovelace", "ada@example.com", "Hello there");
        storage.record_contact_submission(submission).await.unwrap();

        assert_eq!(storage.submission_count().await, 1);
    }

    #[tokio::test]
    async fn analytics_counts_and_sums_by_stage() {
        let storage = InMemoryStorage::seeded(anchor());
        let analytics = storage.crm_analytics().await.unwrap();
        assert_eq!(analytics.total_contacts, 3);
        assert_eq!(analytics.total_leads, 2);
        assert_eq!(analytics.total_opportunities, 3);
        assert_eq!(analytics.open_opportunity_value, Amount::from_major(42_000));
        assert_eq!(analytics.won_opportunity_value, Amount::from_major(12_500));
    }
}
