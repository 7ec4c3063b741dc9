//! Shared handler state

use crate::storage::Storage;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            started_at: Utc::now(),
        }
    }
}
