//! Dashboard summary reduction.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::portfolio::types::{Holding, PortfolioSummary};
use crate::types::AccountId;

/// Reduce per-account holdings into top-line dashboard totals.
///
/// Pure and deterministic; defined for the empty map. The profit rate is
/// computed against `total_assets - total_profit_loss`, matching the
/// original dashboard arithmetic, and is zero when that denominator is
/// zero.
pub fn summarize(holdings_by_account: &HashMap<AccountId, Vec<Holding>>) -> PortfolioSummary {
    let mut total_assets = Decimal::ZERO;
    let mut total_profit_loss = Decimal::ZERO;
    let mut holding_count = 0usize;

    for holdings in holdings_by_account.values() {
        holding_count += holdings.len();
        for holding in holdings {
            total_assets += holding.total_value();
            total_profit_loss += holding.profit_loss();
        }
    }

    let cost_basis = total_assets - total_profit_loss;
    let profit_rate = if cost_basis.is_zero() {
        Decimal::ZERO
    } else {
        total_profit_loss / cost_basis * Decimal::from(100)
    };

    PortfolioSummary {
        total_assets,
        total_profit_loss,
        profit_rate,
        holding_count,
    }
}
