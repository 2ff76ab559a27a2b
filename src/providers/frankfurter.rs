use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, error, instrument};

use crate::core::client::{ExchangeRateClient, Result};
use crate::core::currency::{ConversionRequest, Currency};
use crate::core::error::ExchangeError;
use crate::core::listing::CurrencyListing;

/// Client for the Frankfurter exchange rate API.
pub struct FrankfurterClient {
    base_url: String,
    http: reqwest::Client,
    listing: CurrencyListing,
}

impl FrankfurterClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("xrate/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(FrankfurterClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            listing: CurrencyListing::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(reqwest::StatusCode, String)> {
        debug!(?query, "Requesting {}", url);
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ExchangeError::fetch(url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ExchangeError::fetch(url, e))?;
        Ok((status, text))
    }

    async fn fetch_currencies(&self, url: &str) -> Result<Vec<Currency>> {
        let (status, text) = self.fetch_text(url, &[]).await?;
        if !status.is_success() {
            return Err(ExchangeError::fetch(url, format!("HTTP error: {status}")));
        }
        parse_currencies(url, &text)
    }

    async fn fetch_rates(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<HashMap<String, f64>> {
        let (status, text) = self.fetch_text(url, query).await?;

        let parsed = serde_json::from_str::<RatesResponse>(&text);
        if let Some(message) = parsed.as_ref().ok().and_then(RatesResponse::error_message) {
            return Err(ExchangeError::Upstream(message));
        }

        if !status.is_success() {
            return Err(ExchangeError::fetch(url, format!("HTTP error: {status}")));
        }

        parsed
            .map(|response| response.rates)
            .map_err(|e| ExchangeError::parse(url, e))
    }

    async fn fetch_rate(&self, url: &str, query: &[(&str, &str)], target: &str) -> Result<f64> {
        let rates = self.fetch_rates(url, query).await?;
        rates
            .get(target)
            .copied()
            .ok_or_else(|| ExchangeError::MissingRate {
                currency: target.to_string(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
    error: Option<Value>,
}

impl RatesResponse {
    /// The upstream error, if the `error` field holds anything other than
    /// null, false, zero or an empty string.
    fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(message) if message.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn parse_currencies(url: &str, text: &str) -> Result<Vec<Currency>> {
    let mapping: Map<String, Value> =
        serde_json::from_str(text).map_err(|e| ExchangeError::parse(url, e))?;

    mapping
        .into_iter()
        .map(|(code, name)| match name {
            Value::String(name) => Ok(Currency::new(code, name)),
            other => Err(ExchangeError::parse(
                url,
                format!("expected a name for {code}, got {other}"),
            )),
        })
        .collect()
}

#[async_trait]
impl ExchangeRateClient for FrankfurterClient {
    #[instrument(name = "FrankfurterCurrencies", skip(self))]
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        let url = format!("{}/currencies", self.base_url);

        let result = self
            .fetch_currencies(&url)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to fetch currencies"))?;

        debug!(count = result.len(), "Fetched currencies");
        self.listing.replace(result.clone()).await;
        Ok(result)
    }

    async fn currencies(&self) -> Vec<Currency> {
        self.listing.snapshot().await.to_vec()
    }

    async fn find_currency(&self, code: &str) -> Option<Currency> {
        self.listing.find(code).await
    }

    #[instrument(
        name = "FrankfurterConvert",
        skip(self, source, target),
        fields(from = %source.code, to = %target.code)
    )]
    async fn convert(&self, amount: &str, source: &Currency, target: &Currency) -> Result<f64> {
        let request = ConversionRequest::new(amount, source, target)
            .inspect_err(|e| error!(error = %e, "Rejected conversion request"))?;

        if request.is_identity() {
            debug!("Identity conversion, skipping request");
            return Ok(request.amount);
        }

        let url = format!("{}/latest", self.base_url);
        let amount = request.amount.to_string();
        let query = [
            ("amount", amount.as_str()),
            ("from", request.source.code.as_str()),
            ("to", request.target.code.as_str()),
        ];
        let rate = self
            .fetch_rate(&url, &query, &request.target.code)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to convert currency"))?;

        Ok(rate * request.amount)
    }

    #[instrument(name = "FrankfurterRateDifference", skip(self))]
    async fn rate_difference(
        &self,
        date1: NaiveDate,
        date2: NaiveDate,
        base: &str,
        target: &str,
    ) -> Result<f64> {
        let url_for = |date: NaiveDate| format!("{}/{}", self.base_url, date.format("%Y-%m-%d"));
        let (url1, url2) = (url_for(date1), url_for(date2));
        let query = [("from", base), ("to", target)];

        let (rate1, rate2) = futures::future::try_join(
            self.fetch_rate(&url1, &query, target),
            self.fetch_rate(&url2, &query, target),
        )
        .await
        .inspect_err(|e| error!(error = %e, "Failed to fetch exchange rate difference"))?;

        debug!(rate1, rate2, "Fetched historical rates");
        Ok(rate1 - rate2)
    }
}
