//! Broker adapter seam.
//!
//! The ledger never talks to a brokerage directly; it hands a recorded
//! order to a `BrokerAdapter` and later receives an `OrderEvent` when the
//! broker acknowledges the fill or rejection. Timeouts and retries belong
//! to the adapter, not the ledger.

use async_trait::async_trait;
use thiserror::Error;

use crate::orders::types::Order;

/// Dispatch failure reported by a broker adapter. Carries the
/// human-readable detail from the brokerage or transport unchanged.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BrokerError(pub String);

/// Immediate response from order dispatch. The fill itself arrives later
/// as an `OrderEvent`.
#[derive(Debug, Clone, Default)]
pub struct BrokerAck {
    /// Broker-assigned order number, when the broker reports one.
    pub broker_order_no: Option<String>,
}

/// External collaborator that dispatches orders to the brokerage.
#[async_trait]
pub trait BrokerAdapter: Send + Sync {
    /// Dispatch an order. An error here means the submission never
    /// reached the broker; the caller records the order as rejected.
    async fn place(&self, order: &Order) -> Result<BrokerAck, BrokerError>;
}
