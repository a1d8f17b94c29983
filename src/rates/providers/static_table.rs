use std::collections::{BTreeMap, HashMap};

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;

use crate::decimal::parse_decimal_str;
use crate::models::Amount;
use crate::net_worth::normalize_currency_code;
use crate::rates::RateProvider;

/// In-memory rate table keyed by `FROM_TO` pairs.
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    rates: HashMap<String, Decimal>,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rates served by the currency rate sandbox (x-rates.com, 2018-06-16).
    pub fn sandbox() -> Self {
        Self::new()
            .with_rate("USD", "CAD", Decimal::new(1320236, 6))
            .with_rate("CAD", "USD", Decimal::new(757440, 6))
            .with_rate("USD", "EUR", Decimal::new(861585, 6))
            .with_rate("EUR", "USD", Decimal::new(1160652, 6))
            .with_rate("CAD", "EUR", Decimal::new(652599, 6))
            .with_rate("EUR", "CAD", Decimal::new(1532334, 6))
    }

    /// Build a table from `"USD_EUR" = "0.86"` style entries.
    pub fn from_table(table: &BTreeMap<String, String>) -> Result<Self> {
        let mut provider = Self::new();
        for (pair, rate) in table {
            let (from, to) = pair
                .split_once('_')
                .with_context(|| format!("Invalid rate pair {pair:?}: expected FROM_TO"))?;
            let rate = parse_decimal_str(rate)
                .with_context(|| format!("Invalid rate for {pair}: {rate:?}"))?;
            provider = provider.with_rate(from, to, rate);
        }
        Ok(provider)
    }

    pub fn with_rate(mut self, from: &str, to: &str, rate: Decimal) -> Self {
        self.rates.insert(Self::key(from, to), rate);
        self
    }

    fn key(from: &str, to: &str) -> String {
        format!(
            "{}_{}",
            normalize_currency_code(from),
            normalize_currency_code(to)
        )
    }
}

#[async_trait::async_trait]
impl RateProvider for StaticRateProvider {
    async fn conversion_rate(&self, from: &str, to: &str) -> Result<Amount> {
        if normalize_currency_code(from) == normalize_currency_code(to) {
            return Ok(Amount::Decimal(Decimal::ONE));
        }

        let key = Self::key(from, to);
        self.rates
            .get(&key)
            .copied()
            .map(Amount::Decimal)
            .ok_or_else(|| anyhow!("Currency rate pair not supported: {key}"))
    }

    fn name(&self) -> &str {
        "static"
    }
}
