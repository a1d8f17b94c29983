//! Frankfurter rate provider using ECB daily reference rates.
//!
//! ECB publishes rates with EUR as the base currency, so any other pair is
//! computed as a cross rate through EUR.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::decimal::value_to_decimal;
use crate::models::Amount;
use crate::net_worth::normalize_currency_code;
use crate::rates::RateProvider;

const FRANKFURTER_BASE_URL: &str = "https://api.frankfurter.app";

/// Response from the Frankfurter `latest` endpoint.
#[derive(Debug, Deserialize)]
struct FrankfurterResponse {
    /// The base currency.
    #[allow(dead_code)]
    base: String,
    /// The date of the rates.
    date: String,
    /// Map of currency codes to rates, kept as JSON so they parse exactly.
    rates: HashMap<String, Value>,
}

#[derive(Debug, Clone)]
pub struct FrankfurterRateProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterRateProvider {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: FRANKFURTER_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the latest rates with EUR as base.
    async fn fetch_eur_rates(&self, currencies: &[&str]) -> Result<HashMap<String, Decimal>> {
        let symbols = currencies.join(",");
        let url = format!(
            "{}/latest?from=EUR&to={symbols}",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Frankfurter request failed: {url}"))?
            .error_for_status()?
            .json::<FrankfurterResponse>()
            .await
            .context("Malformed response from Frankfurter")?;

        tracing::debug!(date = %response.date, symbols = %symbols, "Fetched ECB reference rates");

        let mut rates = HashMap::with_capacity(response.rates.len());
        for (code, rate) in response.rates {
            let rate = value_to_decimal(&rate)
                .with_context(|| format!("Invalid rate for {code}: {rate}"))?;
            rates.insert(code, rate);
        }
        Ok(rates)
    }

    fn rate_for(rates: &HashMap<String, Decimal>, code: &str) -> Result<Decimal> {
        rates
            .get(code)
            .copied()
            .ok_or_else(|| anyhow!("Currency {code} not found in response"))
    }

    /// base/quote = (EUR/quote) / (EUR/base).
    fn compute_cross_rate(eur_to_base: Decimal, eur_to_quote: Decimal) -> Result<Decimal> {
        eur_to_quote
            .checked_div(eur_to_base)
            .ok_or_else(|| anyhow!("Cannot compute cross rate from EUR rate {eur_to_base}"))
    }
}

impl Default for FrankfurterRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RateProvider for FrankfurterRateProvider {
    async fn conversion_rate(&self, from: &str, to: &str) -> Result<Amount> {
        let base = normalize_currency_code(from);
        let quote = normalize_currency_code(to);

        if base == quote {
            return Ok(Amount::Decimal(Decimal::ONE));
        }

        let rate = if base == "EUR" {
            let rates = self.fetch_eur_rates(&[&quote]).await?;
            Self::rate_for(&rates, &quote)?
        } else if quote == "EUR" {
            let rates = self.fetch_eur_rates(&[&base]).await?;
            let eur_to_base = Self::rate_for(&rates, &base)?;
            Self::compute_cross_rate(eur_to_base, Decimal::ONE)?
        } else {
            let rates = self.fetch_eur_rates(&[&base, &quote]).await?;
            let eur_to_base = Self::rate_for(&rates, &base)?;
            let eur_to_quote = Self::rate_for(&rates, &quote)?;
            Self::compute_cross_rate(eur_to_base, eur_to_quote)?
        };

        Ok(Amount::Decimal(rate))
    }

    fn name(&self) -> &str {
        "frankfurter"
    }
}
