use anyhow::Result;

use crate::models::Amount;

/// Source of currency conversion rates.
///
/// A resolved rate may be a JSON number, a numeric string or a decimal; the
/// caller coerces it and treats anything non-numeric as a failure.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    async fn conversion_rate(&self, from: &str, to: &str) -> Result<Amount>;

    fn name(&self) -> &str;
}
