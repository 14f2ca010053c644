//! Portfolio type definitions with strong typing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single instrument position within one trading account's balance
/// snapshot. Valuation figures are derived from the snapshot, never
/// cached across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    pub average_price: Decimal,
    pub current_price: Decimal,
}

impl Holding {
    /// Market value of the position at the current price.
    pub fn total_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.current_price
    }

    /// Unrealized profit or loss against the average purchase price.
    pub fn profit_loss(&self) -> Decimal {
        (self.current_price - self.average_price) * Decimal::from(self.quantity)
    }

    /// Profit/loss as a percentage of cost basis. Zero when the cost
    /// basis is not positive.
    pub fn profit_loss_rate(&self) -> Decimal {
        let cost_basis = self.average_price * Decimal::from(self.quantity);
        if cost_basis > Decimal::ZERO {
            self.profit_loss() / cost_basis * Decimal::from(100)
        } else {
            Decimal::ZERO
        }
    }
}

/// Top-line dashboard totals reduced from all holdings of all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_assets: Decimal,
    pub total_profit_loss: Decimal,
    pub profit_rate: Decimal,
    pub holding_count: usize,
}

impl PortfolioSummary {
    pub fn empty() -> Self {
        Self {
            total_assets: Decimal::ZERO,
            total_profit_loss: Decimal::ZERO,
            profit_rate: Decimal::ZERO,
            holding_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(quantity: i64, average: Decimal, current: Decimal) -> Holding {
        Holding {
            symbol: "069500".to_string(),
            quantity,
            average_price: average,
            current_price: current,
        }
    }

    #[test]
    fn test_valuation() {
        let h = holding(10, dec!(100), dec!(110));
        assert_eq!(h.total_value(), dec!(1100));
        assert_eq!(h.profit_loss(), dec!(100));
        assert_eq!(h.profit_loss_rate(), dec!(10));
    }

    #[test]
    fn test_loss_position() {
        let h = holding(5, dec!(200), dec!(190));
        assert_eq!(h.total_value(), dec!(950));
        assert_eq!(h.profit_loss(), dec!(-50));
        assert_eq!(h.profit_loss_rate(), dec!(-5));
    }

    #[test]
    fn test_zero_cost_basis_has_no_rate() {
        let h = holding(0, dec!(100), dec!(110));
        assert_eq!(h.profit_loss_rate(), Decimal::ZERO);

        let free = holding(10, dec!(0), dec!(110));
        assert_eq!(free.profit_loss_rate(), Decimal::ZERO);
    }
}
