//! Error taxonomy for the order and portfolio core.
//!
//! Validation and duplicate errors are resolved locally before any network
//! call. Balance fetch failures are contained per-account by the aggregator.
//! Auth errors always propagate to the top and force re-authentication.

use crate::types::{AccountId, OrderId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing input, caught before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Reference to an account or order unknown to the caller.
    #[error("{0} not found")]
    NotFound(String),

    /// Account number already registered for this user.
    #[error("trading account {0} is already registered")]
    DuplicateAccount(String),

    /// Order dispatch to the broker failed. The order is still recorded
    /// as REJECTED in the ledger.
    #[error("order {order_id} could not be dispatched: {detail}")]
    Submission { order_id: OrderId, detail: String },

    /// One account's balance query failed.
    #[error("balance fetch failed for account {account_id}: {detail}")]
    BalanceFetch { account_id: AccountId, detail: String },

    /// Missing or expired session.
    #[error("not authenticated: {0}")]
    Auth(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
