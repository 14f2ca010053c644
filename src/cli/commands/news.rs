use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;

#[derive(Args)]
pub struct NewsArgs {
    /// Restrict news to one instrument
    #[arg(long)]
    pub symbol: Option<String>,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: NewsArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let news = client
        .news(args.symbol.as_deref())
        .await
        .context("Failed to fetch news")?;

    println!("{}", "NEWS".bright_yellow());
    // Broker payload shape varies by feed; show headlines when present,
    // otherwise the raw document.
    match news.get("output").and_then(|v| v.as_array()) {
        Some(items) if !items.is_empty() => {
            for item in items {
                let title = item
                    .get("hts_pbnt_titl_cntt")
                    .or_else(|| item.get("title"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("(untitled)");
                println!("• {}", title);
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(&news)?),
    }
    Ok(())
}
