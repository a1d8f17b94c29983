use serde_json::Value;

use crate::models::{BalanceSheetModel, BalanceSheetSection, LineItem, DEFAULT_CURRENCY};

/// Read an arbitrary input into a well-formed balance sheet.
///
/// Missing, null or non-object sections become empty; a missing or blank
/// currency becomes [`DEFAULT_CURRENCY`]; any other currency string is kept
/// as given. The input is only read.
pub fn normalize(input: Option<&Value>) -> BalanceSheetModel {
    let fields = input.and_then(Value::as_object);

    let section = |name: &str| {
        fields
            .and_then(|fields| fields.get(name))
            .map(section_from_json)
            .unwrap_or_default()
    };

    let currency = fields
        .and_then(|fields| fields.get("currency"))
        .and_then(Value::as_str)
        .filter(|code| !code.trim().is_empty())
        .map_or_else(|| DEFAULT_CURRENCY.to_string(), str::to_string);

    BalanceSheetModel {
        assets: section("assets"),
        liabilities: section("liabilities"),
        currency,
    }
}

fn section_from_json(value: &Value) -> BalanceSheetSection {
    match value.as_object() {
        Some(entries) => entries
            .iter()
            .map(|(name, entry)| (name.clone(), LineItem::from_json(entry)))
            .collect(),
        None => BalanceSheetSection::new(),
    }
}

/// Canonical form used to compare currency codes.
pub fn normalize_currency_code(value: &str) -> String {
    value.trim().to_uppercase()
}
