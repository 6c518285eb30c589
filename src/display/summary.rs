//! Summary formatting utilities for terminal output
//!
//! Provides the dashboard totals view and small formatting helpers shared by
//! the other display modules.

use crate::models::{BudgetHealth, Totals};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the dashboard totals
pub fn format_summary(totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Monthly Summary\n");
    output.push_str(&separator(32));
    output.push('\n');
    output.push_str(&format!(
        "  Budget:      {:>14}\n",
        totals.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:       {:>14}\n",
        totals.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:   {:>14}\n",
        totals.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Saved:       {:>14}\n",
        totals.total_saved.format_with_symbol(symbol)
    ));
    output.push_str(&separator(32));
    output.push('\n');

    let spent_pct = totals.total_spent.percent_of(totals.budget);
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(spent_pct, 100.0, 20),
        format_percentage(spent_pct)
    ));

    let status = match totals.health() {
        BudgetHealth::Healthy => "You're on track this month.".to_string(),
        BudgetHealth::Low => "Careful: less than 10% of your budget is left.".to_string(),
        BudgetHealth::Overspent => format!(
            "You're over budget by {}.",
            totals.remaining.abs().format_with_symbol(symbol)
        ),
    };
    output.push_str(&format!("  {}\n", status));

    output
}
