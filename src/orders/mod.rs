//! Order submission and lifecycle tracking

pub mod broker;
pub mod ledger;
pub mod types;

pub use broker::{BrokerAck, BrokerAdapter, BrokerError};
pub use ledger::OrderLedger;
pub use types::{Order, OrderEvent, OrderMethod, OrderRequest, OrderSide, OrderStatus};
