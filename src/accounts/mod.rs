//! Trading account registry.
//!
//! Owns the set of linked brokerage accounts for one user. Accounts are
//! registered with broker credentials, listed in creation order, and may
//! be toggled active/inactive or removed. Credentials are validated here
//! and handed to the backend; they are never stored or re-exposed by the
//! registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::CoreError;
use crate::types::AccountId;

/// A registered brokerage account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingAccount {
    pub id: AccountId,
    /// Broker-assigned account number, unique per user.
    pub account_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Broker credentials supplied at registration. Forwarded to credential
/// storage, never retained alongside the account record.
#[derive(Debug, Clone, Serialize)]
pub struct AccountCredentials {
    pub app_key: String,
    pub app_secret: String,
}

/// Registry of trading accounts, kept in creation order.
#[derive(Debug)]
pub struct AccountRegistry {
    accounts: Vec<TradingAccount>,
    next_id: i64,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new account. Fails before any side effect when input is
    /// incomplete or the account number is already linked.
    pub fn register(
        &mut self,
        account_number: &str,
        credentials: &AccountCredentials,
    ) -> Result<TradingAccount, CoreError> {
        if account_number.trim().is_empty() {
            return Err(CoreError::validation("account number must not be empty"));
        }
        if credentials.app_key.trim().is_empty() || credentials.app_secret.trim().is_empty() {
            return Err(CoreError::validation(
                "app key and app secret must not be empty",
            ));
        }
        if self
            .accounts
            .iter()
            .any(|a| a.account_number == account_number)
        {
            return Err(CoreError::DuplicateAccount(account_number.to_string()));
        }

        let account = TradingAccount {
            id: AccountId(self.next_id),
            account_number: account_number.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        info!(account_id = %account.id, account_number = %account.account_number, "Registered trading account");
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Mirror an account that already exists on the backend, preserving
    /// its id. Used when hydrating the registry from the account list.
    pub fn insert(&mut self, account: TradingAccount) -> Result<(), CoreError> {
        if self
            .accounts
            .iter()
            .any(|a| a.account_number == account.account_number)
        {
            return Err(CoreError::DuplicateAccount(account.account_number));
        }
        if account.id.0 >= self.next_id {
            self.next_id = account.id.0 + 1;
        }
        self.accounts.push(account);
        Ok(())
    }

    /// All accounts in creation order. Empty when none are registered.
    pub fn list(&self) -> &[TradingAccount] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Result<&TradingAccount, CoreError> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found(format!("trading account {}", id)))
    }

    pub fn remove(&mut self, id: AccountId) -> Result<TradingAccount, CoreError> {
        let idx = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found(format!("trading account {}", id)))?;
        Ok(self.accounts.remove(idx))
    }

    pub fn set_active(&mut self, id: AccountId, active: bool) -> Result<(), CoreError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found(format!("trading account {}", id)))?;
        account.is_active = active;
        Ok(())
    }

    /// Ids of accounts currently flagged active, in creation order.
    pub fn active_ids(&self) -> Vec<AccountId> {
        self.accounts
            .iter()
            .filter(|a| a.is_active)
            .map(|a| a.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AccountCredentials {
        AccountCredentials {
            app_key: "key".to_string(),
            app_secret: "secret".to_string(),
        }
    }

    #[test]
    fn test_register_defaults_active() {
        let mut registry = AccountRegistry::new();
        let account = registry.register("12345678-01", &creds()).unwrap();

        assert!(account.is_active);
        assert_eq!(account.account_number, "12345678-01");
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_register_rejects_empty_fields() {
        let mut registry = AccountRegistry::new();

        assert!(matches!(
            registry.register("", &creds()),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            registry.register(
                "12345678-01",
                &AccountCredentials {
                    app_key: String::new(),
                    app_secret: "secret".to_string(),
                }
            ),
            Err(CoreError::Validation(_))
        ));
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_number() {
        let mut registry = AccountRegistry::new();
        registry.register("12345678-01", &creds()).unwrap();

        assert!(matches!(
            registry.register("12345678-01", &creds()),
            Err(CoreError::DuplicateAccount(_))
        ));
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let mut registry = AccountRegistry::new();
        registry.register("11111111-01", &creds()).unwrap();
        registry.register("22222222-01", &creds()).unwrap();
        registry.register("33333333-01", &creds()).unwrap();

        let numbers: Vec<&str> = registry
            .list()
            .iter()
            .map(|a| a.account_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["11111111-01", "22222222-01", "33333333-01"]);
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = AccountRegistry::new();
        assert!(matches!(
            registry.get(AccountId(99)),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut registry = AccountRegistry::new();
        let a = registry.register("11111111-01", &creds()).unwrap();
        let b = registry.register("22222222-01", &creds()).unwrap();

        registry.set_active(b.id, false).unwrap();
        assert_eq!(registry.active_ids(), vec![a.id]);

        registry.remove(a.id).unwrap();
        assert!(registry.get(a.id).is_err());
        assert_eq!(registry.list().len(), 1);
    }
}
