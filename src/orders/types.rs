//! Order type definitions with strong typing

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AccountId, OrderId};

/// Order side (buy/sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

/// Order pricing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderMethod {
    Market,
    Limit,
}

impl OrderMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMethod::Market => "MARKET",
            OrderMethod::Limit => "LIMIT",
        }
    }
}

/// Order lifecycle status
///
/// Pending is the only initial state; Executed and Rejected are terminal
/// and never left once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Executed,
    Rejected,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Executed | OrderStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Executed => "EXECUTED",
            OrderStatus::Rejected => "REJECTED",
        }
    }
}

/// A submission request, before validation and ledger entry.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub trading_account_id: AccountId,
    pub symbol: String,
    pub side: OrderSide,
    pub method: OrderMethod,
    pub quantity: u32,
    /// Required for limit orders; must be absent for market orders, which
    /// are priced by the broker.
    pub price: Option<Decimal>,
}

/// A recorded order. Immutable after creation except for the lifecycle
/// status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub trading_account_id: AccountId,
    pub symbol: String,
    pub side: OrderSide,
    pub method: OrderMethod,
    pub quantity: u32,
    pub price: Option<Decimal>,
    pub status: OrderStatus,
    /// Broker-assigned order number, set when dispatch succeeds.
    pub broker_order_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Broker acknowledgment delivered asynchronously after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    Executed {
        order_id: OrderId,
    },
    Rejected {
        order_id: OrderId,
        reason: Option<String>,
    },
}

impl OrderEvent {
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::Executed { order_id } => *order_id,
            OrderEvent::Rejected { order_id, .. } => *order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Executed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_wire_representation() {
        assert_eq!(OrderSide::Buy.as_str(), "BUY");
        assert_eq!(OrderMethod::Limit.as_str(), "LIMIT");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"PENDING\""
        );
    }
}
