//! Error kinds surfaced by exchange rate operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Transport failure or a non-success HTTP status.
    #[error("Request failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The response body was not in the expected shape.
    #[error("Failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The response body carried an explicit error message.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("No rate found for currency: {currency}")]
    MissingRate { currency: String },

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

impl ExchangeError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        ExchangeError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(url: &str, reason: impl ToString) -> Self {
        ExchangeError::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
