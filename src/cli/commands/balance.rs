use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::adapters::RestBalanceSource;
use crate::data_paths::DataPaths;
use crate::display;
use crate::errors::CoreError;
use crate::portfolio::BalanceSource;
use crate::types::AccountId;

#[derive(Args)]
pub struct BalanceArgs {
    /// Trading account id (see 'etfdesk account list')
    pub account_id: i64,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: BalanceArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let registry = super::load_registry(&client).await?;

    let account_id = AccountId(args.account_id);
    let account = registry.get(account_id)?;

    println!(
        "{} {}",
        "ACCOUNT".bright_yellow(),
        account.account_number.bright_cyan()
    );

    let source = RestBalanceSource::new(&client);
    let holdings = source
        .holdings(account_id)
        .await
        .map_err(|e| CoreError::BalanceFetch {
            account_id,
            detail: e.to_string(),
        })?;
    display::print_holdings(&holdings);

    Ok(())
}
