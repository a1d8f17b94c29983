use rust_decimal::Decimal;

use crate::decimal::{add_or_saturate, to_decimal_or};
use crate::models::BalanceSheetSection;

/// Sum the values of a section. Non-numeric values count as zero and a sum
/// past the decimal range is clamped.
pub fn total_of(section: &BalanceSheetSection) -> Decimal {
    section
        .values()
        .map(|item| to_decimal_or(&item.value, Decimal::ZERO))
        .fold(Decimal::ZERO, add_or_saturate)
}
