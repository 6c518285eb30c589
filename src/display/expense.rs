//! Expense display formatting
//!
//! Provides a register-style listing of expenses, newest first.

use crate::models::{Expense, Ledger};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, ledger: &Ledger, symbol: &str, date_format: &str) -> String {
    let category = ledger.category(expense.category);

    format!(
        "{:<16} {:<10} {} {:<16} {:<28} {:>12}",
        expense.id,
        expense.date.format(date_format),
        category.icon,
        truncate(&category.name, 16),
        truncate(&expense.description, 28),
        expense.amount.format_with_symbol(symbol)
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(
    expenses: &[&Expense],
    ledger: &Ledger,
    symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:<10} {:<19} {:<28} {:>12}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(89));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, ledger, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_empty_list() {
        let output = format_expense_list(&[], &Ledger::new(), "$", "%Y-%m-%d");
        assert!(output.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_expense_list() {
        let mut ledger = Ledger::new();
        let expense = ledger
            .add_expense_at(
                Money::from_cents(899),
                CategoryKind::Entertainment,
                "Movie night with the whole floor of the dorm",
                Utc.with_ymd_and_hms(2025, 2, 14, 20, 0, 0).unwrap(),
            )
            .unwrap();

        let expenses = ledger.expenses_by_recency();
        let output = format_expense_list(&expenses, &ledger, "$", "%d/%m/%Y");

        assert!(output.contains(&expense.id.to_string()));
        assert!(output.contains("14/02/2025"));
        assert!(output.contains("Entertainment"));
        assert!(output.contains("Movie night with the whol..."));
        assert!(output.contains("$8.99"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("café crème brûlée", 8), "café ...");
    }
}
