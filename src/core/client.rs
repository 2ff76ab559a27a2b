//! Exchange rate client abstraction

use super::currency::Currency;
use super::error::ExchangeError;
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, ExchangeError>;

#[async_trait]
pub trait ExchangeRateClient: Send + Sync {
    /// Fetches the supported currencies in upstream order and replaces the
    /// client's listing with them. The listing is left untouched on failure.
    async fn list_currencies(&self) -> Result<Vec<Currency>>;

    /// Current listing; empty until `list_currencies` succeeds.
    async fn currencies(&self) -> Vec<Currency>;

    async fn find_currency(&self, code: &str) -> Option<Currency>;

    /// Converts `amount` (user text) from `source` to `target`.
    async fn convert(&self, amount: &str, source: &Currency, target: &Currency) -> Result<f64>;

    /// Returns `rate(date1) - rate(date2)` for the `base`/`target` pair.
    async fn rate_difference(
        &self,
        date1: NaiveDate,
        date2: NaiveDate,
        base: &str,
        target: &str,
    ) -> Result<f64>;
}
