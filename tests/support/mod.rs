use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use networth::models::{Amount, BalanceSheetModel, LineItem};
use networth::rates::RateProvider;

/// Rate provider that resolves with a fixed amount and counts its calls.
#[derive(Debug, Clone)]
pub struct MockRateProvider {
    rate: Option<Amount>,
    calls: Arc<AtomicUsize>,
}

impl MockRateProvider {
    pub fn resolving(rate: impl Into<Amount>) -> Self {
        Self {
            rate: Some(rate.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            rate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    async fn conversion_rate(&self, _from: &str, _to: &str) -> Result<Amount> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.rate {
            Some(rate) => Ok(rate.clone()),
            None => anyhow::bail!("mock provider rejected the request"),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// `{A: 2}` against `{L: 1}` in USD.
pub fn simple_model() -> BalanceSheetModel {
    BalanceSheetModel::new("USD")
        .with_asset("LineItem01", LineItem::new(2))
        .with_liability("LineItem01", LineItem::new(1))
}
