//! Forward projection of a balance sheet.
//!
//! Each period compounds every asset by its interest rate. Liabilities accrue
//! interest on the full prior balance and then have a whole year of monthly
//! payments subtracted in one step. A liability that is paid off or overpaid
//! stops counting toward the period total, but its tracked balance keeps the
//! computed (possibly negative) value for the next period.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::{add_or_saturate, mul_or_saturate, sub_or_saturate, to_decimal_or};
use crate::models::{Amount, BalanceSheetSection, LineItem};

/// Number of periods produced by [`project`].
pub const PROJECTION_PERIODS: usize = 20;

const PAYMENTS_PER_PERIOD: i64 = 12;

/// Balances and totals at the end of one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPeriod {
    pub period: usize,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub asset_balances: BTreeMap<String, Decimal>,
    pub liability_balances: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projection {
    pub periods: Vec<ProjectionPeriod>,
}

impl Projection {
    pub fn net_worth(&self) -> Vec<Decimal> {
        self.periods.iter().map(|period| period.net_worth).collect()
    }
}

/// Net worth at the end of each of the next [`PROJECTION_PERIODS`] periods.
pub fn project(assets: &BalanceSheetSection, liabilities: &BalanceSheetSection) -> Vec<Decimal> {
    project_detailed(assets, liabilities).net_worth()
}

/// Like [`project`], keeping every item's balance for every period.
pub fn project_detailed(
    assets: &BalanceSheetSection,
    liabilities: &BalanceSheetSection,
) -> Projection {
    let mut periods: Vec<ProjectionPeriod> = Vec::with_capacity(PROJECTION_PERIODS);

    for period in 0..PROJECTION_PERIODS {
        let previous = periods.last();

        let mut total_assets = Decimal::ZERO;
        let mut asset_balances = BTreeMap::new();
        for (name, item) in assets {
            let base = opening_balance(previous.map(|p| &p.asset_balances), name, item);
            let balance = accrue(base, item);

            total_assets = add_or_saturate(total_assets, balance);
            asset_balances.insert(name.clone(), balance);
        }

        let mut total_liabilities = Decimal::ZERO;
        let mut liability_balances = BTreeMap::new();
        for (name, item) in liabilities {
            let base = opening_balance(previous.map(|p| &p.liability_balances), name, item);
            let payments = mul_or_saturate(
                amount_or_zero(item.monthly_payment.as_ref()),
                Decimal::from(PAYMENTS_PER_PERIOD),
            );
            let balance = sub_or_saturate(accrue(base, item), payments);

            if balance > Decimal::ZERO {
                total_liabilities = add_or_saturate(total_liabilities, balance);
            }
            liability_balances.insert(name.clone(), balance);
        }

        periods.push(ProjectionPeriod {
            period,
            total_assets,
            total_liabilities,
            net_worth: sub_or_saturate(total_assets, total_liabilities),
            asset_balances,
            liability_balances,
        });
    }

    Projection { periods }
}

fn opening_balance(
    previous: Option<&BTreeMap<String, Decimal>>,
    name: &str,
    item: &LineItem,
) -> Decimal {
    match previous {
        Some(balances) => balances.get(name).copied().unwrap_or(Decimal::ZERO),
        None => to_decimal_or(&item.value, Decimal::ZERO),
    }
}

// One period of interest on `base`. Balances past the decimal range stay clamped.
fn accrue(base: Decimal, item: &LineItem) -> Decimal {
    let interest = mul_or_saturate(base, percent(item.interest_rate.as_ref()));
    add_or_saturate(base, interest)
}

fn amount_or_zero(amount: Option<&Amount>) -> Decimal {
    amount.map_or(Decimal::ZERO, |amount| to_decimal_or(amount, Decimal::ZERO))
}

fn percent(rate: Option<&Amount>) -> Decimal {
    amount_or_zero(rate) / Decimal::ONE_HUNDRED
}
