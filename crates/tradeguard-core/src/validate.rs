use crate::error::ValidationError;
use crate::types::{ContactFormSubmission, NewTransaction};

/// Currencies the marketplace settles in.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["GBP", "USD", "EUR"];

/// Validate a contact submission before dispatch.
///
/// Required fields are checked first so a submission with several problems
/// reports the missing fields in one pass; the email shape is only checked
/// once all required fields are present.
pub fn validate_contact_form(form: &ContactFormSubmission) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if form.first_name.trim().is_empty() {
        missing.push("firstName");
    }
    if form.last_name.trim().is_empty() {
        missing.push("lastName");
    }
    if form.email.trim().is_empty() {
        missing.push("email");
    }
    if form.message.trim().is_empty() {
        missing.push("message");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    if !is_valid_email(form.email.trim()) {
        return Err(ValidationError::InvalidEmail(form.email.clone()));
    }
    Ok(())
}

/// Validate a transaction creation request before dispatch.
pub fn validate_new_transaction(request: &NewTransaction) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if request.title.trim().is_empty() {
        missing.push("title");
    }
    if request.seller_email.trim().is_empty() {
        missing.push("sellerEmail");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    if !is_valid_email(request.seller_email.trim()) {
        return Err(ValidationError::InvalidEmail(request.seller_email.clone()));
    }
    if !request.amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }
    let currency = request.currency.trim().to_ascii_uppercase();
    if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
        return Err(ValidationError::UnsupportedCurrency(request.currency.clone()));
    }
    Ok(())
}

/// Address shape check: a single `@`, no whitespace, and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
