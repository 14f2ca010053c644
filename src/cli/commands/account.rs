use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;

use crate::accounts::AccountCredentials;
use crate::api::types::TradingAccountCreate;
use crate::data_paths::DataPaths;
use crate::display;

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommands,
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Link a new brokerage account
    Add {
        /// Broker-assigned account number
        account_number: String,
    },
    /// List linked accounts in registration order
    List,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: AccountArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;

    match args.command {
        AccountCommands::Add { account_number } => {
            let app_key = rpassword::prompt_password("Broker app key: ")?;
            let app_secret = rpassword::prompt_password("Broker app secret: ")?;
            let credentials = AccountCredentials {
                app_key,
                app_secret,
            };

            // Validate locally (empty fields, duplicate number) before
            // the credentials go anywhere near the network.
            let mut registry = super::load_registry(&client).await?;
            registry.register(&account_number, &credentials)?;

            let created = client
                .create_trading_account(&TradingAccountCreate {
                    account_number: account_number.clone(),
                    app_key: credentials.app_key,
                    app_secret: credentials.app_secret,
                })
                .await
                .context("Failed to register trading account")?;

            println!(
                "{} Registered account {} (id {})",
                "✅".bright_green(),
                created.account_number.bright_cyan(),
                created.id
            );
        }
        AccountCommands::List => {
            let registry = super::load_registry(&client).await?;
            display::print_accounts(registry.list());
        }
    }
    Ok(())
}
