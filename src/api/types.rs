//! Wire types for the trading backend REST API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::TradingAccount;
use crate::portfolio::Holding;
use crate::types::AccountId;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TradingAccountCreate {
    pub account_number: String,
    pub app_key: String,
    pub app_secret: String,
}

#[derive(Debug, Deserialize)]
pub struct TradingAccountResponse {
    pub id: i64,
    pub account_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TradingAccountResponse> for TradingAccount {
    fn from(r: TradingAccountResponse) -> Self {
        TradingAccount {
            id: AccountId(r.id),
            account_number: r.account_number,
            is_active: r.is_active,
            created_at: r.created_at,
        }
    }
}

/// One holding row from `GET /api/balance`. The backend may omit the
/// derived valuation fields; they are recomputed locally from quantity
/// and prices.
#[derive(Debug, Deserialize)]
pub struct BalanceRecord {
    pub symbol: String,
    pub quantity: i64,
    pub average_price: Decimal,
    pub current_price: Option<Decimal>,
    pub total_value: Option<Decimal>,
    pub profit_loss: Option<Decimal>,
    pub profit_loss_rate: Option<Decimal>,
}

impl From<BalanceRecord> for Holding {
    fn from(r: BalanceRecord) -> Self {
        Holding {
            symbol: r.symbol,
            quantity: r.quantity,
            average_price: r.average_price,
            current_price: r.current_price.unwrap_or(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderCreate {
    pub trading_account_id: i64,
    pub symbol: String,
    pub order_type: String,
    pub order_method: String,
    pub quantity: u32,
    /// Serialized as a JSON number; the backend schema types this as a
    /// float, not a string.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub symbol: String,
    pub order_type: String,
    pub order_method: String,
    pub quantity: u32,
    pub price: Option<Decimal>,
    pub status: String,
    pub kis_order_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// VWAP strategy parameters, forwarded opaquely; the dashboard does not
/// interpret them.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyCreate {
    pub name: String,
    pub strategy_type: String,
    pub vwap_period: u32,
    pub entry_threshold: f64,
    pub exit_threshold: f64,
    pub stop_loss_percent: f64,
    pub take_profit_percent: f64,
    pub max_holding_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct SystemStatus {
    pub api_status: String,
    pub active_accounts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(price: Option<Decimal>) -> OrderCreate {
        OrderCreate {
            trading_account_id: 1,
            symbol: "069500".to_string(),
            order_type: "BUY".to_string(),
            order_method: "LIMIT".to_string(),
            quantity: 10,
            price,
        }
    }

    #[test]
    fn test_order_price_serializes_as_number() {
        let body = serde_json::to_value(order(Some(dec!(35000)))).unwrap();
        assert!(body["price"].is_number(), "got: {}", body["price"]);
        assert_eq!(body["price"], serde_json::json!(35000.0));
    }

    #[test]
    fn test_market_order_omits_price() {
        let body = serde_json::to_value(order(None)).unwrap();
        assert!(body.get("price").is_none());
    }
}
