use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::api::types::StrategyCreate;
use crate::data_paths::DataPaths;

/// VWAP strategy parameters. Defaults mirror the backend schema; the
/// dashboard forwards them without interpreting.
#[derive(Args)]
pub struct StrategyArgs {
    /// Strategy name
    #[arg(long, default_value = "vwap-default")]
    pub name: String,

    /// VWAP averaging period in days
    #[arg(long, default_value_t = 1)]
    pub vwap_period: u32,

    /// Entry threshold (% below VWAP)
    #[arg(long, default_value_t = 0.5)]
    pub entry_threshold: f64,

    /// Exit threshold (% above VWAP)
    #[arg(long, default_value_t = 1.0)]
    pub exit_threshold: f64,

    /// Stop-loss percent
    #[arg(long, default_value_t = 2.0)]
    pub stop_loss: f64,

    /// Take-profit percent
    #[arg(long, default_value_t = 3.0)]
    pub take_profit: f64,

    /// Maximum holding period in days
    #[arg(long, default_value_t = 5)]
    pub max_holding_days: u32,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: StrategyArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;

    let strategy = StrategyCreate {
        name: args.name.clone(),
        strategy_type: "VWAP".to_string(),
        vwap_period: args.vwap_period,
        entry_threshold: args.entry_threshold,
        exit_threshold: args.exit_threshold,
        stop_loss_percent: args.stop_loss,
        take_profit_percent: args.take_profit,
        max_holding_days: args.max_holding_days,
    };

    client
        .apply_strategy(&strategy)
        .await
        .context("Failed to apply strategy")?;

    println!(
        "{} Strategy {} forwarded to the backend",
        "✅".bright_green(),
        args.name.bright_cyan()
    );
    Ok(())
}
