use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;

#[derive(Args)]
pub struct PriceArgs {
    /// Instrument code
    pub symbol: String,

    /// Broker market code (J = KRX)
    #[arg(long, default_value = "J")]
    pub market_code: String,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: PriceArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let quote = client
        .current_price(&args.symbol, &args.market_code)
        .await
        .context("Failed to fetch current price")?;

    println!("{} {}", "QUOTE".bright_yellow(), args.symbol.bright_cyan());

    // The broker quote structure: "output" carries the price fields
    let output = quote.get("output").unwrap_or(&quote);
    let known = [
        ("stck_prpr", "Current price"),
        ("prdy_vrss", "Change"),
        ("prdy_ctrt", "Change %"),
        ("acml_vol", "Volume"),
    ];
    let mut printed = false;
    for (field, label) in known {
        if let Some(value) = output.get(field).and_then(|v| v.as_str()) {
            println!("{:<14} {}", label, value);
            printed = true;
        }
    }
    if !printed {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    }
    Ok(())
}
