//! Balance source trait definition

use async_trait::async_trait;
use thiserror::Error;

use crate::portfolio::types::Holding;
use crate::types::AccountId;

/// Failure of one account's balance query. Carries the collaborator's
/// human-readable detail unchanged.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BalanceFetchError(pub String);

/// External collaborator returning the current holdings snapshot for a
/// trading account. Implementations own their timeout policy.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn holdings(&self, account_id: AccountId) -> Result<Vec<Holding>, BalanceFetchError>;
}
