//! Cross-account balance aggregation.
//!
//! One balance query is issued per account, fanned out concurrently and
//! joined. A failing account never aborts the others: the outcome carries
//! both the per-account holdings and the set of accounts that failed.

use futures::future::join_all;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::accounts::AccountRegistry;
use crate::portfolio::sources::BalanceSource;
use crate::portfolio::types::Holding;
use crate::types::AccountId;

/// Partial-failure aggregation result: successes and failures side by
/// side, never an unwinding error.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    /// Holdings per account, in the order the balance source returned them.
    pub holdings: HashMap<AccountId, Vec<Holding>>,
    /// Accounts whose balance query failed, with the collaborator's detail.
    pub failures: HashMap<AccountId, String>,
}

impl AggregateOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Query the balance source for each requested account.
pub async fn aggregate(
    source: &dyn BalanceSource,
    account_ids: &[AccountId],
) -> AggregateOutcome {
    let queries = account_ids
        .iter()
        .map(|&id| async move { (id, source.holdings(id).await) });

    let mut outcome = AggregateOutcome::default();
    for (account_id, result) in join_all(queries).await {
        match result {
            Ok(holdings) => {
                debug!(%account_id, holdings = holdings.len(), "Fetched balance");
                outcome.holdings.insert(account_id, holdings);
            }
            Err(e) => {
                warn!(%account_id, detail = %e, "Balance fetch failed");
                outcome.failures.insert(account_id, e.to_string());
            }
        }
    }
    outcome
}

/// Aggregate over the accounts currently flagged active. Inactive
/// accounts are only queried when passed to [`aggregate`] explicitly.
pub async fn aggregate_active(
    source: &dyn BalanceSource,
    registry: &AccountRegistry,
) -> AggregateOutcome {
    aggregate(source, &registry.active_ids()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountCredentials;
    use crate::portfolio::sources::BalanceFetchError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    /// Balance source that fails for a configurable set of accounts.
    struct FakeSource {
        failing: Vec<AccountId>,
    }

    #[async_trait]
    impl BalanceSource for FakeSource {
        async fn holdings(
            &self,
            account_id: AccountId,
        ) -> Result<Vec<Holding>, BalanceFetchError> {
            if self.failing.contains(&account_id) {
                return Err(BalanceFetchError("broker timeout".to_string()));
            }
            Ok(vec![Holding {
                symbol: format!("SYM{}", account_id.0),
                quantity: 10,
                average_price: dec!(100),
                current_price: dec!(110),
            }])
        }
    }

    #[tokio::test]
    async fn test_aggregate_collects_all_accounts() {
        let source = FakeSource { failing: vec![] };
        let ids = [AccountId(1), AccountId(2)];

        let outcome = aggregate(&source, &ids).await;
        assert!(outcome.is_complete());
        assert_eq!(outcome.holdings.len(), 2);
        assert_eq!(outcome.holdings[&AccountId(1)][0].symbol, "SYM1");
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_rest() {
        let source = FakeSource {
            failing: vec![AccountId(2)],
        };
        let ids = [AccountId(1), AccountId(2)];

        let outcome = aggregate(&source, &ids).await;
        assert!(!outcome.is_complete());
        assert_eq!(outcome.holdings.len(), 1);
        assert!(outcome.holdings.contains_key(&AccountId(1)));
        assert_eq!(outcome.failures[&AccountId(2)], "broker timeout");
    }

    #[tokio::test]
    async fn test_aggregate_active_skips_inactive_accounts() {
        let mut registry = AccountRegistry::new();
        let creds = AccountCredentials {
            app_key: "key".to_string(),
            app_secret: "secret".to_string(),
        };
        let a = registry.register("11111111-01", &creds).unwrap();
        let b = registry.register("22222222-01", &creds).unwrap();
        registry.set_active(b.id, false).unwrap();

        let source = FakeSource { failing: vec![] };
        let outcome = aggregate_active(&source, &registry).await;

        assert_eq!(outcome.holdings.len(), 1);
        assert!(outcome.holdings.contains_key(&a.id));

        // Inactive accounts can still be queried explicitly
        let explicit = aggregate(&source, &[b.id]).await;
        assert!(explicit.holdings.contains_key(&b.id));
    }

    #[tokio::test]
    async fn test_aggregate_empty_request() {
        let source = FakeSource { failing: vec![] };
        let outcome = aggregate(&source, &[]).await;
        assert!(outcome.holdings.is_empty());
        assert!(outcome.is_complete());
    }
}
