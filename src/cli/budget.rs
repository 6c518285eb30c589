//! Budget CLI commands
//!
//! Implements CLI commands for setting the monthly budget and viewing the
//! category allocations and totals.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_overview, format_category_table, format_goal_list, format_summary};
use crate::error::SmartSaveResult;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget and re-allocate every category
    Set {
        /// Amount (e.g., "1000" or "1000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget and category allocations
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SmartSaveResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_budget(amount)?;

            println!("Monthly budget set to {}", amount.format_with_symbol(symbol));
            println!();
            print!("{}", format_category_table(&service.ledger()?, symbol));
            println!();
        }
        BudgetCommands::Show => {
            print!("{}", format_budget_overview(&service.ledger()?, symbol));
        }
    }

    Ok(())
}

/// Print the category table
pub fn show_categories(storage: &Storage, settings: &Settings) -> SmartSaveResult<()> {
    let ledger = storage.ledger.get()?;
    println!("{}", format_category_table(&ledger, &settings.currency_symbol));
    Ok(())
}

/// Print the dashboard totals and goals
pub fn show_summary(storage: &Storage, settings: &Settings) -> SmartSaveResult<()> {
    let ledger = storage.ledger.get()?;
    let symbol = settings.currency_symbol.as_str();

    print!("{}", format_summary(&ledger.totals(), symbol));
    if !ledger.savings_goals().is_empty() {
        println!();
        print!("{}", format_goal_list(ledger.savings_goals(), symbol));
    }
    Ok(())
}
