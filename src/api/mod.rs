//! Trading backend API client.
//!
//! Thin typed wrapper over the backend REST surface. The bearer token
//! from the explicit [`Session`] is attached to every call; backend
//! error bodies carry a human-readable `detail` field that is surfaced
//! to the caller unchanged.

pub mod adapters;
pub mod types;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::session::Session;
use crate::types::AccountId;
use types::*;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or expired session; the operator must log in again.
    #[error("not authenticated: {0}")]
    Auth(String),

    /// The backend rejected the request; `detail` is its own message.
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid host url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Option<Session>,
}

impl ApiClient {
    /// Create an unauthenticated client (login, health checks).
    pub fn new(host: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder().timeout(DEFAULT_TIMEOUT).build()?,
            base_url: Url::parse(host)?,
            session: None,
        })
    }

    /// Create a client that attaches the session's bearer token to every
    /// request.
    pub fn with_session(host: &str, session: Session) -> Result<Self, ApiError> {
        let mut client = Self::new(host)?;
        client.session = Some(session);
        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, method = %method, "API request");
        let mut builder = self.http.request(method, url);
        if let Some(session) = &self.session {
            builder = builder.bearer_auth(&session.access_token);
        }
        Ok(builder)
    }

    async fn handle<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth(
                "session missing or expired, run 'etfdesk login'".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json().await?)
    }

    /// `POST /api/auth/login` (form-encoded, per the backend's OAuth2
    /// password flow).
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .request(Method::POST, "/api/auth/login")?
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/auth/me`
    pub async fn me(&self) -> Result<UserResponse, ApiError> {
        let response = self.request(Method::GET, "/api/auth/me")?.send().await?;
        self.handle(response).await
    }

    /// `GET /api/trading-account`
    pub async fn trading_accounts(&self) -> Result<Vec<TradingAccountResponse>, ApiError> {
        let response = self
            .request(Method::GET, "/api/trading-account")?
            .send()
            .await?;
        self.handle(response).await
    }

    /// `POST /api/trading-account`
    pub async fn create_trading_account(
        &self,
        account: &TradingAccountCreate,
    ) -> Result<TradingAccountResponse, ApiError> {
        let response = self
            .request(Method::POST, "/api/trading-account")?
            .json(account)
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/trading-account/{id}`
    pub async fn trading_account(
        &self,
        id: AccountId,
    ) -> Result<TradingAccountResponse, ApiError> {
        let response = self
            .request(Method::GET, &format!("/api/trading-account/{}", id))?
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/balance?trading_account_id=`
    pub async fn balances(&self, account_id: AccountId) -> Result<Vec<BalanceRecord>, ApiError> {
        let response = self
            .request(Method::GET, "/api/balance")?
            .query(&[("trading_account_id", account_id.0)])
            .send()
            .await?;
        self.handle(response).await
    }

    /// `POST /api/order`
    pub async fn create_order(&self, order: &OrderCreate) -> Result<OrderResponse, ApiError> {
        let response = self
            .request(Method::POST, "/api/order")?
            .json(order)
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/order?skip=&limit=`
    pub async fn orders(&self, skip: u32, limit: u32) -> Result<Vec<OrderResponse>, ApiError> {
        let response = self
            .request(Method::GET, "/api/order")?
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/market/current-price/{symbol}?market_code=`. The payload
    /// is the broker's raw quote structure, passed through untyped.
    pub async fn current_price(
        &self,
        symbol: &str,
        market_code: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/market/current-price/{}", symbol),
            )?
            .query(&[("market_code", market_code)])
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/news?symbol=`. Untyped broker payload, like quotes.
    pub async fn news(&self, symbol: Option<&str>) -> Result<serde_json::Value, ApiError> {
        let mut request = self.request(Method::GET, "/api/news")?;
        if let Some(symbol) = symbol {
            request = request.query(&[("symbol", symbol)]);
        }
        let response = request.send().await?;
        self.handle(response).await
    }

    /// `POST /api/strategy` — strategy parameters are forwarded opaquely.
    pub async fn apply_strategy(
        &self,
        strategy: &StrategyCreate,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .request(Method::POST, "/api/strategy")?
            .json(strategy)
            .send()
            .await?;
        self.handle(response).await
    }

    /// `GET /api/system/status`
    pub async fn system_status(&self) -> Result<SystemStatus, ApiError> {
        let response = self
            .request(Method::GET, "/api/system/status")?
            .send()
            .await?;
        self.handle(response).await
    }
}
