use anyhow::Result;
use clap::Args;

use crate::api::adapters::RestBalanceSource;
use crate::data_paths::DataPaths;
use crate::display;
use crate::portfolio::{aggregate, aggregate_active, summarize};

#[derive(Args)]
pub struct DashboardArgs {
    /// Include inactive accounts in the aggregation
    #[arg(long)]
    pub all: bool,
}

pub async fn execute(host: &str, data_paths: DataPaths, args: DashboardArgs) -> Result<()> {
    let client = super::authed_client(host, &data_paths)?;
    let registry = super::load_registry(&client).await?;

    let source = RestBalanceSource::new(&client);
    let outcome = if args.all {
        let all_ids: Vec<_> = registry.list().iter().map(|a| a.id).collect();
        aggregate(&source, &all_ids).await
    } else {
        aggregate_active(&source, &registry).await
    };

    let summary = summarize(&outcome.holdings);
    display::print_summary(&summary);
    display::print_outcome(registry.list(), &outcome);

    Ok(())
}
