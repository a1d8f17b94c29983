use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BalanceSheetSection;

/// Derived figures for a balance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculated {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    /// Net worth at the end of each projection period.
    pub future_net_worth: Vec<Decimal>,
}

/// A balance sheet in its output currency together with its calculated block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputModel {
    pub assets: BalanceSheetSection,
    pub liabilities: BalanceSheetSection,
    pub currency: String,
    pub calculated: Calculated,
}
