use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Amount;

/// One named asset or liability entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Monetary amount. Non-numeric values count as zero but are kept.
    #[serde(default)]
    pub value: Amount,

    /// Percent per projection period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Amount>,

    /// Liabilities only. Twelve payments are deducted per period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Amount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Unrecognized fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    pub fn new(value: impl Into<Amount>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_interest_rate(mut self, rate: impl Into<Amount>) -> Self {
        self.interest_rate = Some(rate.into());
        self
    }

    pub fn with_monthly_payment(mut self, payment: impl Into<Amount>) -> Self {
        self.monthly_payment = Some(payment.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build a line item from loosely-shaped JSON.
    ///
    /// Never fails: a non-object entry yields an item with a null value, and a
    /// non-string `category` is kept as an extra field.
    pub fn from_json(entry: &Value) -> Self {
        let mut item = Self::default();
        let Some(fields) = entry.as_object() else {
            return item;
        };

        for (key, field) in fields {
            match (key.as_str(), field) {
                ("value", _) => item.value = Amount::Raw(field.clone()),
                ("interestRate", _) => item.interest_rate = Some(Amount::Raw(field.clone())),
                ("monthlyPayment", _) => item.monthly_payment = Some(Amount::Raw(field.clone())),
                ("category", Value::String(category)) => item.category = Some(category.clone()),
                _ => {
                    item.extra.insert(key.clone(), field.clone());
                }
            }
        }

        item
    }
}
