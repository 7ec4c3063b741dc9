//! Async HTTP client for the Tradeguard API.
//!
//! Wraps the CRM, transactions, contact, decision-engine, and monitoring
//! endpoints with typed requests and responses from `tradeguard-core`.
//! Submissions are validated locally before dispatch, and failures surface as
//! a single flat [`ClientError`].

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod form;

pub use client::{ServiceStatus, TradeguardClient};
pub use error::{ClientError, ClientResult};
pub use form::ContactForm;
