use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::api::adapters::RestBroker;
use crate::data_paths::DataPaths;
use crate::display;
use crate::errors::CoreError;
use crate::orders::{OrderLedger, OrderMethod, OrderRequest, OrderSide};
use crate::types::AccountId;

/// Shared by the buy and sell commands; the side comes from the
/// subcommand itself.
#[derive(Args)]
pub struct BuyArgs {
    /// Trading account id to place the order under
    #[arg(long)]
    pub account: i64,

    /// Instrument code
    pub symbol: String,

    /// Number of shares
    #[arg(long, short)]
    pub quantity: u32,

    /// Limit price. Omit for a market order, which is priced by the
    /// broker.
    #[arg(long, short)]
    pub price: Option<Decimal>,
}

pub async fn execute(
    host: &str,
    data_paths: DataPaths,
    args: BuyArgs,
    side: OrderSide,
) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let registry = super::load_registry(&client).await?;

    let method = if args.price.is_some() {
        OrderMethod::Limit
    } else {
        OrderMethod::Market
    };
    let request = OrderRequest {
        trading_account_id: AccountId(args.account),
        symbol: args.symbol,
        side,
        method,
        quantity: args.quantity,
        price: args.price,
    };

    let mut ledger = OrderLedger::new();
    let broker = RestBroker::new(&client);

    match ledger.submit(&registry, request, &broker).await {
        Ok(order) => {
            println!(
                "{} Order submitted, awaiting broker acknowledgment",
                "✅".bright_green()
            );
            display::print_orders(&[order]);
        }
        Err(CoreError::Submission { order_id, detail }) => {
            println!(
                "{} Order dispatch failed and was recorded as rejected: {}",
                "❌".bright_red(),
                detail
            );
            display::print_orders(&[ledger.get(order_id)?.clone()]);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
