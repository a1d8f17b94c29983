use std::sync::Arc;

use crate::config::{RateProviderKind, RatesConfig};
use crate::rates::{RateProvider, StaticRateProvider};

/// Build the configured rate provider, if any.
///
/// A provider that cannot be built is logged and skipped; computations then
/// run without conversion.
pub fn build_rate_provider(config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    match config.provider {
        RateProviderKind::None => None,
        RateProviderKind::Static => build_static(config),
        RateProviderKind::Sandbox => build_sandbox(config),
        RateProviderKind::Frankfurter => build_frankfurter(config),
    }
}

fn build_static(config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    if config.table.is_empty() {
        return Some(Arc::new(StaticRateProvider::sandbox()));
    }

    match StaticRateProvider::from_table(&config.table) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load static rate table; continuing without conversion");
            None
        }
    }
}

#[cfg(feature = "http")]
fn http_client(config: &RatesConfig) -> Option<reqwest::Client> {
    match reqwest::Client::builder().timeout(config.timeout).build() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "failed to build HTTP client; continuing without conversion");
            None
        }
    }
}

#[cfg(feature = "http")]
fn build_sandbox(config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    use crate::rates::providers::SandboxRateProvider;

    let mut provider = SandboxRateProvider::with_client(http_client(config)?)
        .with_timeout(config.timeout);
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    Some(Arc::new(provider))
}

#[cfg(feature = "http")]
fn build_frankfurter(config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    use crate::rates::providers::FrankfurterRateProvider;

    let mut provider = FrankfurterRateProvider::with_client(http_client(config)?);
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    Some(Arc::new(provider))
}

#[cfg(not(feature = "http"))]
fn build_sandbox(_config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    tracing::warn!("sandbox rate provider requires the `http` feature; continuing without conversion");
    None
}

#[cfg(not(feature = "http"))]
fn build_frankfurter(_config: &RatesConfig) -> Option<Arc<dyn RateProvider>> {
    tracing::warn!("frankfurter rate provider requires the `http` feature; continuing without conversion");
    None
}
