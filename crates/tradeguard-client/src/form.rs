use crate::client::TradeguardClient;
use crate::error::ClientResult;
use tradeguard_core::{ContactFormSubmission, MessageResponse};

/// Client-side contact form state.
///
/// Mirrors the submission flow the dashboards implement: a validation failure
/// or failed dispatch leaves the entered values in place for resubmission,
/// and only a successful dispatch clears the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the entered values as a submission payload. Empty optional
    /// fields are omitted from the wire shape.
    pub fn to_submission(&self) -> ContactFormSubmission {
        let mut submission = ContactFormSubmission::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
            self.message.trim(),
        );
        if !self.phone.trim().is_empty() {
            submission = submission.with_phone(self.phone.trim());
        }
        if !self.company.trim().is_empty() {
            submission = submission.with_company(self.company.trim());
        }
        if !self.subject.trim().is_empty() {
            submission = submission.with_subject(self.subject.trim());
        }
        submission
    }

    /// Validate and submit the form.
    ///
    /// Validation failures short-circuit before any network call. On success
    /// the form resets to empty; on any failure the entered values survive so
    /// the caller can resubmit.
    pub async fn submit(&mut self, client: &TradeguardClient) -> ClientResult<MessageResponse> {
        let response = client.submit_contact(&self.to_submission()).await?;
        self.reset();
        Ok(response)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            company: "Analytical Engines Ltd".to_string(),
            subject: String::new(),
            message: "Tell me about escrow pricing".to_string(),
        }
    }

    #[test]
    fn snapshot_trims_and_omits_empty_optionals() {
        let submission = filled_form().to_submission();
        assert_eq!(submission.first_name, "Ada");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.company.as_deref(), Some("Analytical Engines Ltd"));
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = filled_form();
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
    }
}
