//! Multi-account portfolio aggregation and dashboard totals

pub mod aggregator;
pub mod sources;
pub mod summary;
pub mod types;

pub use aggregator::{aggregate, aggregate_active, AggregateOutcome};
pub use sources::{BalanceFetchError, BalanceSource};
pub use summary::summarize;
pub use types::{Holding, PortfolioSummary};
