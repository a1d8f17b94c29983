use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;

use super::{convert_section, normalize, normalize_currency_code, project, total_of};
use crate::decimal::{sub_or_saturate, to_decimal};
use crate::error::RateError;
use crate::models::{Amount, BalanceSheetModel, Calculated, OutputModel};
use crate::rates::RateProvider;

/// Computes output models, optionally converting through a rate provider.
#[derive(Clone, Default)]
pub struct NetWorthCompiler {
    provider: Option<Arc<dyn RateProvider>>,
}

impl NetWorthCompiler {
    pub fn new(provider: Option<Arc<dyn RateProvider>>) -> Self {
        Self { provider }
    }

    pub fn with_provider(provider: Arc<dyn RateProvider>) -> Self {
        Self::new(Some(provider))
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|provider| provider.name())
    }

    pub async fn compute(&self, input: &BalanceSheetModel, currency_to: Option<&str>) -> OutputModel {
        compute_output_model(input, currency_to, self.provider.as_deref()).await
    }

    pub async fn compute_value(&self, input: Option<&Value>, currency_to: Option<&str>) -> OutputModel {
        compute_output_model_from_value(input, currency_to, self.provider.as_deref()).await
    }
}

/// Normalize a raw input and compute its output model.
pub async fn compute_output_model_from_value(
    input: Option<&Value>,
    currency_to: Option<&str>,
    provider: Option<&dyn RateProvider>,
) -> OutputModel {
    let model = normalize(input);
    compute_output_model(&model, currency_to, provider).await
}

/// Compute totals and the projection for `input`.
///
/// When `currency_to` names a different currency and a provider is given, the
/// provider is asked for a rate once. If that fails, or the rate is unusable,
/// the model is computed in its own currency instead; this never errors.
pub async fn compute_output_model(
    input: &BalanceSheetModel,
    currency_to: Option<&str>,
    provider: Option<&dyn RateProvider>,
) -> OutputModel {
    let currency = normalize_currency_code(&input.currency);
    let target = currency_to
        .map(normalize_currency_code)
        .filter(|code| !code.is_empty() && *code != currency);

    let (provider, target) = match (provider, target) {
        (Some(provider), Some(target)) => (provider, target),
        (None, Some(target)) => {
            tracing::debug!(from = %currency, to = %target, "No rate provider configured; skipping conversion");
            return compile(input, Decimal::ONE, &input.currency);
        }
        (_, None) => return compile(input, Decimal::ONE, &input.currency),
    };

    match resolve_rate(provider, &currency, &target).await {
        Ok(rate) => compile(input, rate, &target),
        Err(err) => {
            tracing::warn!(
                error = %err,
                from = %currency,
                to = %target,
                "Failed to retrieve currency conversion rate from provider; keeping original currency"
            );
            compile(input, Decimal::ONE, &input.currency)
        }
    }
}

async fn resolve_rate(
    provider: &dyn RateProvider,
    from: &str,
    to: &str,
) -> Result<Decimal, RateError> {
    tracing::debug!(provider = provider.name(), from, to, "Requesting conversion rate");

    let resolved = provider
        .conversion_rate(from, to)
        .await
        .map_err(|error| RateError::Provider {
            provider: provider.name().to_string(),
            error,
        })?;

    match to_decimal(&resolved) {
        Ok(rate) if rate > Decimal::ZERO => Ok(rate),
        _ => Err(RateError::Unusable {
            provider: provider.name().to_string(),
            value: resolved.display(),
        }),
    }
}

fn compile(input: &BalanceSheetModel, rate: Decimal, currency: &str) -> OutputModel {
    let rate = Amount::Decimal(rate);
    let assets = convert_section(&input.assets, &rate);
    let liabilities = convert_section(&input.liabilities, &rate);

    let total_assets = total_of(&assets);
    let total_liabilities = total_of(&liabilities);
    let future_net_worth = project(&assets, &liabilities)
        .into_iter()
        .map(|value| value.normalize())
        .collect();

    OutputModel {
        assets,
        liabilities,
        currency: currency.to_string(),
        calculated: Calculated {
            total_assets: total_assets.normalize(),
            total_liabilities: total_liabilities.normalize(),
            net_worth: sub_or_saturate(total_assets, total_liabilities).normalize(),
            future_net_worth,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use crate::rates::StaticRateProvider;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn simple_model() -> BalanceSheetModel {
        BalanceSheetModel::new("USD")
            .with_asset("A", LineItem::new(2))
            .with_liability("L", LineItem::new(1))
    }

    #[tokio::test]
    async fn same_currency_skips_the_provider() {
        let provider = StaticRateProvider::new();
        let output = compute_output_model(&simple_model(), Some("usd"), Some(&provider)).await;

        assert_eq!(output.currency, "USD");
        assert_eq!(output.calculated.net_worth, dec("1"));
    }

    #[tokio::test]
    async fn unconverted_output_keeps_the_currency_as_given() {
        let provider = StaticRateProvider::sandbox();
        let model = BalanceSheetModel::new("usd").with_asset("A", LineItem::new(2));

        let same = compute_output_model(&model, Some("USD"), Some(&provider)).await;
        assert_eq!(same.currency, "usd");
        assert_eq!(same.calculated.total_assets, dec("2"));

        let fallback = compute_output_model(&model, Some("JPY"), Some(&provider)).await;
        assert_eq!(fallback.currency, "usd");

        let converted = compute_output_model(&model, Some("eur"), Some(&provider)).await;
        assert_eq!(converted.currency, "EUR");
        assert_eq!(converted.calculated.total_assets, dec("1.72317"));
    }

    #[tokio::test]
    async fn missing_provider_keeps_model_currency() {
        let output = compute_output_model(&simple_model(), Some("EUR"), None).await;

        assert_eq!(output.currency, "USD");
        assert_eq!(output.calculated.total_assets, dec("2"));
    }

    #[tokio::test]
    async fn unsupported_pair_falls_back() {
        let provider = StaticRateProvider::new();
        let output = compute_output_model(&simple_model(), Some("JPY"), Some(&provider)).await;

        assert_eq!(output.currency, "USD");
        assert_eq!(output.calculated.total_liabilities, dec("1"));
    }

    #[tokio::test]
    async fn zero_rate_is_unusable() {
        let provider = StaticRateProvider::new().with_rate("USD", "EUR", Decimal::ZERO);
        let output = compute_output_model(&simple_model(), Some("EUR"), Some(&provider)).await;

        assert_eq!(output.currency, "USD");
        assert_eq!(output.calculated.total_assets, dec("2"));
    }

    #[tokio::test]
    async fn compiler_uses_its_provider() {
        let provider = StaticRateProvider::new().with_rate("USD", "CAD", dec("1.5"));
        let compiler = NetWorthCompiler::with_provider(Arc::new(provider));
        let output = compiler.compute(&simple_model(), Some("CAD")).await;

        assert_eq!(compiler.provider_name(), Some("static"));
        assert_eq!(output.currency, "CAD");
        assert_eq!(output.calculated.total_assets, dec("3"));
        assert_eq!(output.calculated.total_liabilities, dec("1.5"));
        assert_eq!(output.calculated.net_worth, dec("1.5"));
        assert_eq!(output.calculated.future_net_worth.len(), 20);
    }
}
