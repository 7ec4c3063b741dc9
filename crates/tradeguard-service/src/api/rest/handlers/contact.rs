//! Contact form handler

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use tradeguard_core::{validate_contact_form, ContactFormSubmission, MessageResponse};

/// Accept a contact form submission.
///
/// Submissions are re-validated here with the same rules the client applies;
/// the service never trusts that the caller validated.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactFormSubmission>,
) -> ApiResult<Json<MessageResponse>> {
    validate_contact_form(&submission)?;

    state.storage.record_contact_submission(submission).await?;

    Ok(Json(MessageResponse {
        message: "Thanks for getting in touch. Our team will reply within one business day."
            .to_string(),
    }))
}
