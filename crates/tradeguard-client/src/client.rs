//! HTTP client for the Tradeguard API

use crate::error::{ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tradeguard_core::{
    validate_contact_form, validate_new_transaction, AlertsResponse, ContactFormSubmission,
    ContactsPage, CrmAnalytics, LeadsPage, LogsResponse, MessageResponse, NewTransaction,
    OpportunitiesPage, PageQuery, RulesResponse, SchedulesResponse, Transaction,
    TransactionsPage,
};

/// HTTP client for communicating with the Tradeguard API.
///
/// The API authenticates with session cookies, so the client keeps a cookie
/// store and sends credentials with every request.
pub struct TradeguardClient {
    client: Client,
    base_url: String,
}

/// Service health response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    /// Liveness marker, `"ok"` when healthy
    pub status: String,
    /// Service version
    pub version: String,
    /// Seconds since startup
    pub uptime_secs: u64,
}

impl TradeguardClient {
    /// Create a new client against the given endpoint.
    pub fn new(endpoint: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Check service health.
    pub async fn health_check(&self) -> ClientResult<ServiceStatus> {
        self.get("/health").await
    }

    // ========== CRM API ==========

    /// List CRM contacts, paginated.
    pub async fn list_contacts(&self, query: PageQuery) -> ClientResult<ContactsPage> {
        self.get(&paged("/api/crm/contacts", query)).await
    }

    /// List CRM leads, paginated.
    pub async fn list_leads(&self, query: PageQuery) -> ClientResult<LeadsPage> {
        self.get(&paged("/api/crm/leads", query)).await
    }

    /// List CRM opportunities, paginated.
    pub async fn list_opportunities(&self, query: PageQuery) -> ClientResult<OpportunitiesPage> {
        self.get(&paged("/api/crm/opportunities", query)).await
    }

    /// Fetch the CRM summary counters.
    pub async fn crm_analytics(&self) -> ClientResult<CrmAnalytics> {
        self.get("/api/crm/analytics").await
    }

    // ========== Transactions API ==========

    /// List transactions, paginated.
    pub async fn list_transactions(&self, query: PageQuery) -> ClientResult<TransactionsPage> {
        self.get(&paged("/api/transactions", query)).await
    }

    /// Create a transaction.
    ///
    /// The request is validated locally first; an invalid request is rejected
    /// without touching the network.
    pub async fn create_transaction(&self, request: &NewTransaction) -> ClientResult<Transaction> {
        validate_new_transaction(request)?;
        self.post("/api/transactions", request).await
    }

    // ========== Contact API ==========

    /// Submit a contact form.
    ///
    /// The submission is validated locally first; an invalid submission is
    /// rejected without touching the network.
    pub async fn submit_contact(
        &self,
        submission: &ContactFormSubmission,
    ) -> ClientResult<MessageResponse> {
        validate_contact_form(submission)?;
        self.post("/api/contact", submission).await
    }

    // ========== Decision engine API ==========

    /// List decision-engine rules.
    pub async fn list_decision_rules(&self) -> ClientResult<RulesResponse> {
        self.get("/api/decisions/rules").await
    }

    /// List decision-engine evaluation logs.
    pub async fn list_decision_logs(&self) -> ClientResult<LogsResponse> {
        self.get("/api/decisions/logs").await
    }

    // ========== Monitoring API ==========

    /// List monitoring alerts.
    pub async fn list_monitoring_alerts(&self) -> ClientResult<AlertsResponse> {
        self.get("/api/monitoring/alerts").await
    }

    /// List monitoring schedules.
    pub async fn list_monitoring_schedules(&self) -> ClientResult<SchedulesResponse> {
        self.get("/api/monitoring/schedules").await
    }

    // ========== Internal HTTP helpers ==========

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound("Resource not found".into()))
        } else {
            let body = response.text().await.unwrap_or_default();
            // Error bodies are `{ message }` when the server produced them;
            // anything else is passed through as-is.
            let message = serde_json::from_str::<MessageResponse>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn paged(path: &str, query: PageQuery) -> String {
    format!("{}?page={}&limit={}", path, query.page(), query.limit())
}
