//! Currency rate sandbox API.
//!
//! `GET {base}/currencyRate/{from}/{to}` answers `{"data": {"rate": 1.32}}`
//! for supported pairs and an `errors` body otherwise.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::models::Amount;
use crate::net_worth::normalize_currency_code;
use crate::rates::RateProvider;

pub const SANDBOX_BASE_URL: &str = "http://currencyrate.getsandbox.com";

/// Per-request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Deserialize)]
struct RateResponse {
    data: Option<RateData>,
}

#[derive(Debug, Deserialize)]
struct RateData {
    rate: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct SandboxRateProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SandboxRateProvider {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: SANDBOX_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn rate_url(&self, from: &str, to: &str) -> String {
        format!(
            "{}/currencyRate/{}/{}",
            self.base_url.trim_end_matches('/'),
            normalize_currency_code(from),
            normalize_currency_code(to)
        )
    }
}

impl Default for SandboxRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// A rate of null, false, zero or an empty string means the API had no answer.
fn is_usable(rate: &Value) -> bool {
    match rate {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[async_trait::async_trait]
impl RateProvider for SandboxRateProvider {
    async fn conversion_rate(&self, from: &str, to: &str) -> Result<Amount> {
        let url = self.rate_url(from, to);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("Currency API request failed: {url}"))?
            .error_for_status()?
            .json::<RateResponse>()
            .await
            .context("Malformed response from currency API")?;

        response
            .data
            .and_then(|data| data.rate)
            .filter(is_usable)
            .map(Amount::Raw)
            .ok_or_else(|| anyhow!("Malformed response from currency API"))
    }

    fn name(&self) -> &str {
        "sandbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_rate_url() {
        let provider = SandboxRateProvider::new().with_base_url("http://localhost:9000/");
        assert_eq!(
            provider.rate_url("usd", "EUR"),
            "http://localhost:9000/currencyRate/USD/EUR"
        );
    }

    #[test]
    fn parses_rate_response() {
        let response: RateResponse =
            serde_json::from_str(r#"{"data": {"rate": 1.320236}}"#).expect("Failed to parse");
        let rate = response.data.and_then(|d| d.rate).unwrap();
        assert_eq!(rate, json!(1.320236));
    }

    #[test]
    fn error_body_has_no_data() {
        let response: RateResponse =
            serde_json::from_str(r#"{"errors": "Currency rate pair not supported"}"#)
                .expect("Failed to parse");
        assert!(response.data.is_none());
    }

    #[test]
    fn falsy_rates_are_not_usable() {
        assert!(!is_usable(&json!(null)));
        assert!(!is_usable(&json!(0)));
        assert!(!is_usable(&json!("")));
        assert!(!is_usable(&json!(false)));
        assert!(is_usable(&json!("0.86")));
        assert!(is_usable(&json!(1.16)));
    }

    #[test]
    fn provider_name() {
        assert_eq!(SandboxRateProvider::default().name(), "sandbox");
    }
}
