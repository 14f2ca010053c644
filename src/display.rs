//! Terminal rendering for dashboard data.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::accounts::TradingAccount;
use crate::api::types::OrderResponse;
use crate::orders::Order;
use crate::portfolio::{AggregateOutcome, Holding, PortfolioSummary};

fn signed(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Render the registered trading accounts.
pub fn print_accounts(accounts: &[TradingAccount]) {
    if accounts.is_empty() {
        println!(
            "{}",
            "No trading accounts registered. Run 'etfdesk account add' first".bright_black()
        );
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Account Number", "Active", "Registered"]);

    for account in accounts {
        table.add_row(vec![
            account.id.to_string(),
            account.account_number.clone(),
            (if account.is_active { "yes" } else { "no" }).to_string(),
            account.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    println!("{table}");
}

/// Render one account's holdings with derived valuation columns.
pub fn print_holdings(holdings: &[Holding]) {
    if holdings.is_empty() {
        println!("{}", "No holdings".bright_black());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Symbol", "Qty", "Avg Price", "Cur Price", "Value", "P/L", "P/L %",
        ]);

    for holding in holdings {
        table.add_row(vec![
            holding.symbol.clone(),
            holding.quantity.to_string(),
            holding.average_price.to_string(),
            holding.current_price.to_string(),
            holding.total_value().to_string(),
            signed(holding.profit_loss()),
            format!("{}%", holding.profit_loss_rate().round_dp(2)),
        ]);
    }
    println!("{table}");
}

/// Render the top-line dashboard totals.
pub fn print_summary(summary: &PortfolioSummary) {
    println!("\n{}", "PORTFOLIO SUMMARY".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());
    println!("Total assets:  {}", summary.total_assets.to_string().bright_green());
    let pl = signed(summary.total_profit_loss);
    if summary.total_profit_loss >= Decimal::ZERO {
        println!(
            "Profit/Loss:   {} ({}%)",
            pl.bright_green(),
            signed(summary.profit_rate.round_dp(2)).bright_green()
        );
    } else {
        println!(
            "Profit/Loss:   {} ({}%)",
            pl.bright_red(),
            signed(summary.profit_rate.round_dp(2)).bright_red()
        );
    }
    println!("Holdings:      {}", summary.holding_count);
}

/// Render per-account holdings plus any accounts whose balance query
/// failed.
pub fn print_outcome(accounts: &[TradingAccount], outcome: &AggregateOutcome) {
    for account in accounts {
        if let Some(holdings) = outcome.holdings.get(&account.id) {
            println!(
                "\n{} {}",
                "ACCOUNT".bright_yellow(),
                account.account_number.bright_cyan()
            );
            print_holdings(holdings);
        }
    }
    for (account_id, detail) in &outcome.failures {
        let number = accounts
            .iter()
            .find(|a| a.id == *account_id)
            .map(|a| a.account_number.as_str())
            .unwrap_or("?");
        println!(
            "{} balance unavailable for account {} ({}): {}",
            "⚠".bright_red(),
            account_id,
            number,
            detail
        );
    }
}

/// Render the order ledger, newest first.
pub fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("{}", "No orders".bright_black());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Created", "Symbol", "Side", "Method", "Qty", "Price", "Status", "Broker No",
        ]);

    for order in orders {
        table.add_row(vec![
            order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            order.symbol.clone(),
            order.side.as_str().to_string(),
            order.method.as_str().to_string(),
            order.quantity.to_string(),
            order
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            order.status.as_str().to_string(),
            order.broker_order_no.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
}

/// Render the remote order history (backend wire rows, newest first).
pub fn print_order_history(orders: &[OrderResponse]) {
    if orders.is_empty() {
        println!("{}", "No orders".bright_black());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Id", "Created", "Symbol", "Side", "Method", "Qty", "Price", "Status",
        ]);

    for order in orders {
        table.add_row(vec![
            order.id.to_string(),
            order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            order.symbol.clone(),
            order.order_type.clone(),
            order.order_method.clone(),
            order.quantity.to_string(),
            order
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            order.status.clone(),
        ]);
    }
    println!("{table}");
}
