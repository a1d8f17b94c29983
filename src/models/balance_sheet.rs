use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Line items keyed by name.
pub type BalanceSheetSection = BTreeMap<String, LineItem>;

/// Currency assumed when the input does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Assets, liabilities and the currency they are denominated in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetModel {
    #[serde(default)]
    pub assets: BalanceSheetSection,

    #[serde(default)]
    pub liabilities: BalanceSheetSection,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BalanceSheetModel {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl BalanceSheetModel {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            assets: BalanceSheetSection::new(),
            liabilities: BalanceSheetSection::new(),
            currency: currency.into(),
        }
    }

    pub fn with_asset(mut self, name: impl Into<String>, item: LineItem) -> Self {
        self.assets.insert(name.into(), item);
        self
    }

    pub fn with_liability(mut self, name: impl Into<String>, item: LineItem) -> Self {
        self.liabilities.insert(name.into(), item);
        self
    }

    /// The household model served when a request carries no balance sheet.
    pub fn seed() -> Self {
        Self::new(DEFAULT_CURRENCY)
            .with_asset(
                "Chequing",
                LineItem::new(2000)
                    .with_interest_rate(0)
                    .with_category("Cash and Investments"),
            )
            .with_asset(
                "Savings for Taxes",
                LineItem::new(4000)
                    .with_interest_rate(5)
                    .with_category("Cash and Investments"),
            )
            .with_asset(
                "Primary Home",
                LineItem::new(4555000)
                    .with_interest_rate(1)
                    .with_category("Long Term Assets"),
            )
            .with_asset(
                "Second Home",
                LineItem::new(1564321)
                    .with_interest_rate(2)
                    .with_category("Long Term Assets"),
            )
            .with_liability(
                "Credit Card 1",
                LineItem::new(4342)
                    .with_monthly_payment(200)
                    .with_interest_rate(50)
                    .with_category("Short Term Liabilities"),
            )
            .with_liability(
                "Credit Card 2",
                LineItem::new(322)
                    .with_monthly_payment(150)
                    .with_interest_rate(22)
                    .with_category("Short Term Liabilities"),
            )
            .with_liability(
                "Mortgage 1",
                LineItem::new(250999)
                    .with_monthly_payment(2000)
                    .with_interest_rate(Decimal::new(26, 1))
                    .with_category("Long Term Debt"),
            )
            .with_liability(
                "Mortgage 2",
                LineItem::new(622634)
                    .with_monthly_payment(3500)
                    .with_interest_rate(Decimal::new(54, 1))
                    .with_category("Long Term Debt"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_both_sections_and_usd() {
        let model = BalanceSheetModel::seed();
        assert_eq!(model.assets.len(), 4);
        assert_eq!(model.liabilities.len(), 4);
        assert_eq!(model.currency, "USD");
    }

    #[test]
    fn deserialize_defaults_missing_sections() {
        let model: BalanceSheetModel = serde_json::from_str("{}").unwrap();
        assert_eq!(model, BalanceSheetModel::default());
    }
}
