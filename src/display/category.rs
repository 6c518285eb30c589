//! Category display formatting
//!
//! Formats the seven budget categories as a table of allocation, spend and
//! alert status.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AlertLevel, Category, Ledger};

use super::summary::format_percentage;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl CategoryRow {
    fn new(category: &Category, symbol: &str) -> Self {
        let usage = category.usage_percent();
        let status = if category.is_over_budget() {
            "Over budget".to_string()
        } else {
            AlertLevel::from_usage(usage).to_string()
        };

        Self {
            name: format!("{} {}", category.icon, category.name),
            allocated: category.allocated.format_with_symbol(symbol),
            spent: category.spent.format_with_symbol(symbol),
            remaining: category.remaining().format_with_symbol(symbol),
            used: format_percentage(usage),
            status,
        }
    }
}

/// Format all categories as a table
pub fn format_category_table(ledger: &Ledger, symbol: &str) -> String {
    let rows: Vec<CategoryRow> = ledger
        .categories()
        .iter()
        .map(|c| CategoryRow::new(c, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// Format the budget header followed by the category table
pub fn format_budget_overview(ledger: &Ledger, symbol: &str) -> String {
    let mut output = String::new();

    if ledger.budget().is_zero() {
        output.push_str("No monthly budget set.\n");
        output.push_str("Run 'smartsave budget set <amount>' to allocate one.\n\n");
    } else {
        output.push_str(&format!(
            "Monthly budget: {}\n\n",
            ledger.budget().format_with_symbol(symbol)
        ));
    }

    output.push_str(&format_category_table(ledger, symbol));
    output.push('\n');
    output
}
