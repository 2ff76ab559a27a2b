//! Currency values and conversion requests

use super::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A currency as listed by the upstream service.
///
/// Two currencies are equal when their codes match; the display name does not
/// take part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Currency {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Parses user supplied amount text. Only non-negative finite numbers are accepted.
pub fn parse_amount(text: &str) -> Result<f64, ExchangeError> {
    let trimmed = text.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ExchangeError::InvalidAmount(text.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ExchangeError::InvalidAmount(text.to_string()));
    }
    Ok(amount)
}

#[derive(Debug, Clone)]
pub struct ConversionRequest<'a> {
    pub amount: f64,
    pub source: &'a Currency,
    pub target: &'a Currency,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(
        amount: &str,
        source: &'a Currency,
        target: &'a Currency,
    ) -> Result<Self, ExchangeError> {
        Ok(ConversionRequest {
            amount: parse_amount(amount)?,
            source,
            target,
        })
    }

    /// True when no rate lookup is needed.
    pub fn is_identity(&self) -> bool {
        self.source.code == self.target.code
    }
}
