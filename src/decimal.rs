//! Coercion of loosely-typed numeric input into [`Decimal`].
//!
//! Numbers are always read from their textual form so that values such as
//! `1.00000001` keep every digit; nothing here goes through `f64` arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::DecimalError;
use crate::models::Amount;

/// Coerce an amount into a decimal.
///
/// Decimals pass through unchanged. JSON numbers and numeric strings are
/// parsed exactly. Anything else is returned inside the error so the caller
/// can keep the original input.
pub fn to_decimal(input: &Amount) -> Result<Decimal, DecimalError> {
    match input {
        Amount::Decimal(value) => Ok(*value),
        Amount::Raw(value) => value_to_decimal(value).ok_or_else(|| DecimalError::NotNumeric {
            value: value.clone(),
        }),
    }
}

/// Coerce an amount into a decimal, using `default` when it is not numeric.
pub fn to_decimal_or(input: &Amount, default: Decimal) -> Decimal {
    to_decimal(input).unwrap_or(default)
}

/// Parse a JSON value as a decimal, if it holds a finite number.
pub fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal_str(&number.to_string()),
        Value::String(s) => parse_decimal_str(s),
        _ => None,
    }
}

/// Parse a numeric string, accepting thousands separators and exponents.
pub fn parse_decimal_str(s: &str) -> Option<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// `lhs + rhs`, clamped to the representable range on overflow.
pub fn add_or_saturate(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs).unwrap_or_else(|| {
        tracing::warn!(%lhs, %rhs, "Decimal addition overflowed; saturating");
        lhs.saturating_add(rhs)
    })
}

/// `lhs - rhs`, clamped to the representable range on overflow.
pub fn sub_or_saturate(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs).unwrap_or_else(|| {
        tracing::warn!(%lhs, %rhs, "Decimal subtraction overflowed; saturating");
        lhs.saturating_sub(rhs)
    })
}

/// `lhs * rhs`, clamped to the representable range on overflow.
pub fn mul_or_saturate(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        tracing::warn!(%lhs, %rhs, "Decimal multiplication overflowed; saturating");
        lhs.saturating_mul(rhs)
    })
}
