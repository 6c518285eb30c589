//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::ExpenseId;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::{parse_amount, parse_category};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, entertainment, shopping, personal-care, subscription, other)
        category: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List expenses, newest first
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (e.g. exp-1735732800000)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SmartSaveResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let receipt = service.add_expense(amount, category, &description)?;

            let ledger = service.ledger()?;
            let cat = ledger.category(category);
            println!(
                "Added expense {}: {} in {} {} ({})",
                receipt.expense.id,
                receipt.expense.amount.format_with_symbol(symbol),
                cat.icon,
                cat.name,
                receipt.expense.description
            );
            if let Some(message) = receipt.message {
                println!("⚠  {}", message);
            }
        }
        ExpenseCommands::List { category, limit } => {
            let ledger = service.ledger()?;
            let filter = category.as_deref().map(parse_category).transpose()?;

            let expenses: Vec<_> = ledger
                .expenses_by_recency()
                .into_iter()
                .filter(|e| filter.map_or(true, |kind| e.category == kind))
                .take(limit)
                .collect();

            print!(
                "{}",
                format_expense_list(&expenses, &ledger, symbol, &settings.date_format)
            );
        }
        ExpenseCommands::Delete { id } => {
            let id: ExpenseId = id
                .trim()
                .parse()
                .map_err(|_| SmartSaveError::Validation(format!("Invalid expense ID: {}", id)))?;

            match service.delete_expense(id)? {
                Some(expense) => println!(
                    "Deleted expense {} ({})",
                    expense.id,
                    expense.amount.format_with_symbol(symbol)
                ),
                None => println!("No expense with ID {}", id),
            }
        }
    }

    Ok(())
}
