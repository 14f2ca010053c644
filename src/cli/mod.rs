//! Command-line interface for the trading dashboard.
//!
//! One subcommand per dashboard page: accounts, orders, balances, the
//! aggregated dashboard, quotes, news, strategy parameters, and system
//! status. Uses clap for argument parsing with one module per command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LoggingConfig};

use commands::account::AccountArgs;
use commands::balance::BalanceArgs;
use commands::buy::BuyArgs;
use commands::dashboard::DashboardArgs;
use commands::login::LoginArgs;
use commands::news::NewsArgs;
use commands::orders::OrdersArgs;
use commands::price::PriceArgs;
use commands::strategy::StrategyArgs;

/// Default backend host (the FastAPI dev server).
pub const DEFAULT_HOST: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "etfdesk")]
#[command(version)]
#[command(about = "Operator dashboard CLI for semi-automated ETF trading", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Trading backend base URL
    #[arg(long, global = true, default_value = DEFAULT_HOST, env = "ETFDESK_HOST")]
    pub host: String,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in to the trading backend and save the session
    Login(LoginArgs),

    /// Show the currently authenticated user
    Whoami,

    /// Log out and discard the saved session
    Logout,

    /// Manage linked brokerage trading accounts
    Account(AccountArgs),

    /// Aggregated holdings and profit/loss across active accounts
    Dashboard(DashboardArgs),

    /// Holdings for a single trading account
    Balance(BalanceArgs),

    /// Place a buy order
    Buy(BuyArgs),

    /// Place a sell order
    Sell(BuyArgs),

    /// Order history, newest first
    Orders(OrdersArgs),

    /// Current price for a symbol
    Price(PriceArgs),

    /// Market news
    News(NewsArgs),

    /// Forward VWAP strategy parameters to the backend
    Strategy(StrategyArgs),

    /// Backend and broker connection status
    Status,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;
        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose))?;

        let host = self.host.as_str();
        match self.command {
            Commands::Login(args) => commands::login::execute(host, data_paths, args).await,
            Commands::Whoami => commands::login::whoami(host, data_paths).await,
            Commands::Logout => commands::login::logout(data_paths),
            Commands::Account(args) => commands::account::execute(host, data_paths, args).await,
            Commands::Dashboard(args) => {
                commands::dashboard::execute(host, data_paths, args).await
            }
            Commands::Balance(args) => commands::balance::execute(host, data_paths, args).await,
            Commands::Buy(args) => {
                commands::buy::execute(host, data_paths, args, crate::orders::OrderSide::Buy).await
            }
            Commands::Sell(args) => {
                commands::buy::execute(host, data_paths, args, crate::orders::OrderSide::Sell)
                    .await
            }
            Commands::Orders(args) => commands::orders::execute(host, data_paths, args).await,
            Commands::Price(args) => commands::price::execute(host, data_paths, args).await,
            Commands::News(args) => commands::news::execute(host, data_paths, args).await,
            Commands::Strategy(args) => commands::strategy::execute(host, data_paths, args).await,
            Commands::Status => commands::status::execute(host, data_paths).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_defaults_to_local_backend() {
        let cli = Cli::try_parse_from(["etfdesk", "status"]).unwrap();
        assert_eq!(cli.host, DEFAULT_HOST);
    }

    #[test]
    fn test_host_flag_overrides_default() {
        let cli =
            Cli::try_parse_from(["etfdesk", "--host", "https://desk.example.com", "status"])
                .unwrap();
        assert_eq!(cli.host, "https://desk.example.com");
    }
}
