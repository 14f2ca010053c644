use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;

pub async fn execute(host: &str, data_paths: DataPaths) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let status = client
        .system_status()
        .await
        .context("Failed to fetch system status")?;

    println!("{}", "SYSTEM STATUS".bright_yellow());
    if status.api_status == "connected" {
        println!("Broker API:      {}", status.api_status.bright_green());
    } else {
        println!("Broker API:      {}", status.api_status.bright_red());
    }
    println!("Active accounts: {}", status.active_accounts);
    Ok(())
}
