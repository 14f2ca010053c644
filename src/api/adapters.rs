//! REST-backed implementations of the core's collaborator traits.

use async_trait::async_trait;

use crate::api::types::OrderCreate;
use crate::api::ApiClient;
use crate::orders::broker::{BrokerAck, BrokerAdapter, BrokerError};
use crate::orders::types::Order;
use crate::portfolio::sources::{BalanceFetchError, BalanceSource};
use crate::portfolio::types::Holding;
use crate::types::AccountId;

/// Balance source backed by `GET /api/balance`.
pub struct RestBalanceSource<'a> {
    client: &'a ApiClient,
}

impl<'a> RestBalanceSource<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BalanceSource for RestBalanceSource<'_> {
    async fn holdings(&self, account_id: AccountId) -> Result<Vec<Holding>, BalanceFetchError> {
        let records = self
            .client
            .balances(account_id)
            .await
            .map_err(|e| BalanceFetchError(e.to_string()))?;
        Ok(records.into_iter().map(Holding::from).collect())
    }
}

/// Broker adapter backed by `POST /api/order`. The backend relays the
/// order to the brokerage and reports its order number.
pub struct RestBroker<'a> {
    client: &'a ApiClient,
}

impl<'a> RestBroker<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BrokerAdapter for RestBroker<'_> {
    async fn place(&self, order: &Order) -> Result<BrokerAck, BrokerError> {
        let create = OrderCreate {
            trading_account_id: order.trading_account_id.0,
            symbol: order.symbol.clone(),
            order_type: order.side.as_str().to_string(),
            order_method: order.method.as_str().to_string(),
            quantity: order.quantity,
            price: order.price,
        };
        let response = self
            .client
            .create_order(&create)
            .await
            .map_err(|e| BrokerError(e.to_string()))?;
        Ok(BrokerAck {
            broker_order_no: response.kis_order_no,
        })
    }
}
