//! CSV Export functionality
//!
//! Exports expenses to CSV, one row per expense, newest first.

use std::io::Write;

use serde::Serialize;

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Ledger;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    #[serde(rename = "ID")]
    id: u64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export all expenses to CSV
///
/// Dates are written with `date_format` (strftime); amounts as plain
/// decimals without a currency symbol.
pub fn export_expenses_csv<W: Write>(
    ledger: &Ledger,
    writer: &mut W,
    date_format: &str,
) -> SmartSaveResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in ledger.expenses_by_recency() {
        let row = ExpenseRow {
            id: expense.id.raw(),
            date: expense.date.format(date_format).to_string(),
            category: expense.category.id(),
            description: &expense.description,
            amount: expense.amount.format_with_symbol(""),
        };
        csv_writer
            .serialize(row)
            .map_err(|e| SmartSaveError::Export(e.to_string()))?;
    }

    // An empty ledger still gets a header row
    if ledger.expenses().is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Category", "Description", "Amount"])
            .map_err(|e| SmartSaveError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SmartSaveError::Export(e.to_string()))?;
    Ok(())
}
