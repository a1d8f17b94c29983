use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;
use crate::models::OutputModel;

/// Format a monetary value for human display.
///
/// Rounds half away from zero when `currency_decimals` is set, pads to that
/// many places, and optionally inserts thousands separators. Canonical JSON
/// output never goes through here.
pub fn format_amount(value: Decimal, display: &DisplayConfig) -> String {
    let rounded = match display.currency_decimals {
        Some(dp) => {
            let mut rounded =
                value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(dp);
            rounded
        }
        None => value.normalize(),
    };

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    if display.currency_grouping {
        out.push_str(&group_thousands(int_part));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac_part) = frac_part.filter(|f| !f.is_empty()) {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

/// Plain-text summary of an output model: totals, then one line per period.
pub fn render_summary(output: &OutputModel, display: &DisplayConfig) -> String {
    let calculated = &output.calculated;
    let mut out = String::new();

    let _ = writeln!(out, "Currency:          {}", output.currency);
    let _ = writeln!(
        out,
        "Total assets:      {}",
        format_amount(calculated.total_assets, display)
    );
    let _ = writeln!(
        out,
        "Total liabilities: {}",
        format_amount(calculated.total_liabilities, display)
    );
    let _ = writeln!(
        out,
        "Net worth:         {}",
        format_amount(calculated.net_worth, display)
    );

    if !calculated.future_net_worth.is_empty() {
        let _ = writeln!(out, "\nProjected net worth:");
        for (period, value) in calculated.future_net_worth.iter().enumerate() {
            let _ = writeln!(out, "  {:>2}  {}", period + 1, format_amount(*value, display));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Calculated;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn display(currency_decimals: Option<u32>, currency_grouping: bool) -> DisplayConfig {
        DisplayConfig {
            currency_decimals,
            currency_grouping,
        }
    }

    #[test]
    fn default_display_strips_trailing_zeros() {
        assert_eq!(format_amount(dec("1234.500"), &display(None, false)), "1234.5");
        assert_eq!(format_amount(dec("-0.0"), &display(None, false)), "0");
    }

    #[test]
    fn rounds_and_pads_to_decimals() {
        assert_eq!(format_amount(dec("2.005"), &display(Some(2), false)), "2.01");
        assert_eq!(format_amount(dec("7"), &display(Some(2), false)), "7.00");
        assert_eq!(format_amount(dec("7.4"), &display(Some(0), false)), "7");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(
            format_amount(dec("1234567.5"), &display(Some(2), true)),
            "1,234,567.50"
        );
        assert_eq!(format_amount(dec("-1234.5"), &display(None, true)), "-1,234.5");
        assert_eq!(format_amount(dec("999"), &display(None, true)), "999");
    }

    #[test]
    fn summary_lists_totals_and_periods() {
        let output = OutputModel {
            assets: Default::default(),
            liabilities: Default::default(),
            currency: "USD".to_string(),
            calculated: Calculated {
                total_assets: dec("2"),
                total_liabilities: dec("1"),
                net_worth: dec("1"),
                future_net_worth: vec![dec("1"), dec("1.5")],
            },
        };

        let summary = render_summary(&output, &display(Some(2), false));
        assert!(summary.contains("Currency:          USD"));
        assert!(summary.contains("Net worth:         1.00"));
        assert!(summary.contains("   2  1.50"));
    }
}
