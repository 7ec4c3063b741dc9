use thiserror::Error;

/// Submission validation failures.
///
/// The `Display` rendering of each variant is the user-visible message, so
/// callers surface these verbatim instead of inventing copy at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Please enter a valid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Unsupported currency code '{0}'")]
    UnsupportedCurrency(String),
}

/// Tradeguard core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid monetary amount: {0}")]
    InvalidAmount(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
