use anyhow::{Context, Result};
use clap::Args;

use crate::data_paths::DataPaths;
use crate::display;

#[derive(Args)]
pub struct OrdersArgs {
    /// Number of orders to skip
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Page size
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: OrdersArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let orders = client
        .orders(args.skip, args.limit)
        .await
        .context("Failed to fetch order history")?;
    display::print_order_history(&orders);
    Ok(())
}
