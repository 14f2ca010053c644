//! Order ledger: records every submission attempt and drives the
//! PENDING → EXECUTED / REJECTED lifecycle.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::accounts::AccountRegistry;
use crate::errors::CoreError;
use crate::orders::broker::BrokerAdapter;
use crate::orders::types::{Order, OrderEvent, OrderMethod, OrderRequest, OrderStatus};
use crate::types::OrderId;

/// In-memory order ledger, insertion-ordered (oldest first).
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Validate and record an order, then dispatch it to the broker.
    ///
    /// Validation failures leave no trace in the ledger. A dispatch
    /// failure records the order as REJECTED before surfacing the error,
    /// so every submission attempt that passed validation is accounted
    /// for. The order returned on success is PENDING; the terminal
    /// transition arrives later via [`apply_event`](Self::apply_event).
    pub async fn submit(
        &mut self,
        registry: &AccountRegistry,
        request: OrderRequest,
        broker: &dyn BrokerAdapter,
    ) -> Result<Order, CoreError> {
        registry.get(request.trading_account_id)?;
        validate_request(&request)?;

        let mut order = Order {
            id: OrderId::generate(),
            trading_account_id: request.trading_account_id,
            symbol: request.symbol,
            side: request.side,
            method: request.method,
            quantity: request.quantity,
            price: request.price,
            status: OrderStatus::Pending,
            broker_order_no: None,
            created_at: Utc::now(),
        };

        match broker.place(&order).await {
            Ok(ack) => {
                order.broker_order_no = ack.broker_order_no;
                info!(
                    order_id = %order.id,
                    symbol = %order.symbol,
                    side = order.side.as_str(),
                    "Order dispatched to broker"
                );
                self.orders.push(order.clone());
                Ok(order)
            }
            Err(e) => {
                order.status = OrderStatus::Rejected;
                let order_id = order.id;
                warn!(order_id = %order_id, detail = %e, "Order dispatch failed, recorded as rejected");
                self.orders.push(order);
                Err(CoreError::Submission {
                    order_id,
                    detail: e.to_string(),
                })
            }
        }
    }

    /// Apply a broker acknowledgment. Terminal orders are left untouched;
    /// unknown order ids are an error.
    pub fn apply_event(&mut self, event: OrderEvent) -> Result<&Order, CoreError> {
        let order_id = event.order_id();
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| CoreError::not_found(format!("order {}", order_id)))?;

        if order.status.is_terminal() {
            warn!(order_id = %order.id, status = order.status.as_str(), "Ignoring event for terminal order");
            return Ok(order);
        }

        match event {
            OrderEvent::Executed { .. } => {
                order.status = OrderStatus::Executed;
                info!(order_id = %order.id, "Order executed");
            }
            OrderEvent::Rejected { reason, .. } => {
                order.status = OrderStatus::Rejected;
                info!(order_id = %order.id, reason = ?reason, "Order rejected by broker");
            }
        }
        Ok(order)
    }

    /// Order history, newest first. A skip past the end of the ledger
    /// yields an empty page rather than an error.
    pub fn list(&self, skip: usize, limit: usize) -> Result<Vec<Order>, CoreError> {
        if limit == 0 {
            return Err(CoreError::validation("limit must be greater than zero"));
        }
        Ok(self
            .orders
            .iter()
            .rev()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn get(&self, id: OrderId) -> Result<&Order, CoreError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::not_found(format!("order {}", id)))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn validate_request(request: &OrderRequest) -> Result<(), CoreError> {
    if request.symbol.trim().is_empty() {
        return Err(CoreError::validation("symbol must not be empty"));
    }
    if request.quantity == 0 {
        return Err(CoreError::validation("quantity must be greater than zero"));
    }
    match request.method {
        OrderMethod::Limit => match request.price {
            Some(price) if price > Decimal::ZERO => Ok(()),
            Some(_) => Err(CoreError::validation(
                "limit orders require a price greater than zero",
            )),
            None => Err(CoreError::validation("limit orders require a price")),
        },
        OrderMethod::Market => {
            // A price on a market order is a mis-specified request, not
            // something to silently ignore.
            if request.price.is_some() {
                Err(CoreError::validation(
                    "market orders must not carry a price",
                ))
            } else {
                Ok(())
            }
        }
    }
}
