use rust_decimal::Decimal;

use crate::decimal::{mul_or_saturate, to_decimal, to_decimal_or};
use crate::models::{Amount, BalanceSheetSection, LineItem};

/// Copy a section, converting monetary fields by `rate`.
///
/// A rate of exactly one (or one that is not numeric) copies every item
/// verbatim. Otherwise `value` and `monthlyPayment` are multiplied; interest
/// rates are percentages and stay as they are.
pub fn convert_section(section: &BalanceSheetSection, rate: &Amount) -> BalanceSheetSection {
    let rate = to_decimal_or(rate, Decimal::ONE);
    if rate == Decimal::ONE {
        return section.clone();
    }

    section
        .iter()
        .map(|(name, item)| (name.clone(), convert_item(item, rate)))
        .collect()
}

fn convert_item(item: &LineItem, rate: Decimal) -> LineItem {
    LineItem {
        value: scale(&item.value, rate),
        monthly_payment: item
            .monthly_payment
            .as_ref()
            .map(|payment| scale(payment, rate)),
        ..item.clone()
    }
}

// Non-numeric amounts are kept as received.
fn scale(amount: &Amount, rate: Decimal) -> Amount {
    match to_decimal(amount) {
        Ok(value) => Amount::Decimal(mul_or_saturate(value, rate).normalize()),
        Err(_) => amount.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> BalanceSheetSection {
        let mut section = BalanceSheetSection::new();
        section.insert(
            "Mortgage".to_string(),
            LineItem::new(Amount::Raw(json!(250999.99)))
                .with_interest_rate(Amount::Raw(json!(2.6)))
                .with_monthly_payment(Amount::Raw(json!(2000)))
                .with_category("Long Term Debt"),
        );
        section.insert("Odd".to_string(), LineItem::new("a"));
        section
    }

    #[test]
    fn identity_rate_copies_values_unchanged() {
        let section = sample();
        assert_eq!(convert_section(&section, &Amount::Decimal(Decimal::ONE)), section);
        assert_eq!(convert_section(&section, &Amount::Raw(json!(1))), section);
        assert_eq!(convert_section(&section, &Amount::from("1.000")), section);
    }

    #[test]
    fn unparseable_rate_is_treated_as_identity() {
        let section = sample();
        assert_eq!(convert_section(&section, &Amount::from("n/a")), section);
    }

    #[test]
    fn converts_value_and_monthly_payment_only() {
        let converted = convert_section(&sample(), &Amount::from("2"));
        let mortgage = &converted["Mortgage"];

        assert_eq!(mortgage.value, Amount::Decimal(dec("501999.98")));
        assert_eq!(mortgage.monthly_payment, Some(Amount::Decimal(dec("4000"))));
        assert_eq!(mortgage.interest_rate, Some(Amount::Raw(json!(2.6))));
        assert_eq!(mortgage.category.as_deref(), Some("Long Term Debt"));
    }

    #[test]
    fn keeps_non_numeric_values() {
        let converted = convert_section(&sample(), &Amount::from("0.5"));
        assert_eq!(converted["Odd"].value, Amount::from("a"));
        assert_eq!(converted["Odd"].monthly_payment, None);
    }

    #[test]
    fn input_section_is_not_mutated() {
        let section = sample();
        let before = section.clone();
        let converted = convert_section(&section, &Amount::from("0.861585"));

        assert_eq!(section, before);
        assert_ne!(converted, section);
        assert_eq!(converted.len(), section.len());
    }

    #[test]
    fn conversion_past_the_decimal_range_is_clamped() {
        let mut section = BalanceSheetSection::new();
        section.insert(
            "Fund".to_string(),
            LineItem::new("50000000000000000000000000000"),
        );
        let converted = convert_section(&section, &Amount::from("2"));
        assert_eq!(converted["Fund"].value, Amount::Decimal(Decimal::MAX));
    }
}
