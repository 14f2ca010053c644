//! CLI command implementations

pub mod account;
pub mod balance;
pub mod buy;
pub mod dashboard;
pub mod login;
pub mod news;
pub mod orders;
pub mod price;
pub mod status;
pub mod strategy;

use anyhow::{Context, Result};

use crate::accounts::AccountRegistry;
use crate::api::ApiClient;
use crate::data_paths::DataPaths;
use crate::session;

/// Build an API client carrying the saved session.
pub(crate) fn authed_client(host: &str, data_paths: &DataPaths) -> Result<ApiClient> {
    let session = session::load_session(data_paths)?;
    let client = ApiClient::with_session(host, session)?;
    Ok(client)
}

/// Hydrate the account registry from the backend's account list.
pub(crate) async fn load_registry(client: &ApiClient) -> Result<AccountRegistry> {
    let mut registry = AccountRegistry::new();
    let accounts = client
        .trading_accounts()
        .await
        .context("Failed to fetch trading accounts")?;
    for account in accounts {
        registry.insert(account.into())?;
    }
    Ok(registry)
}
