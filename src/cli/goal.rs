//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::GoalId;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::parse_amount;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Create {
        /// What you are saving for
        name: String,
        /// Amount to save
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Put money towards a goal
    Contribute {
        /// Goal ID (e.g. goal-1735732800000)
        id: String,
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List savings goals
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> SmartSaveResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Create { name, target } => {
            let target = parse_amount(&target)?;
            let goal = service.create_goal(&name, target)?;
            println!(
                "Created savings goal: {} (target {})",
                goal.name,
                goal.target.format_with_symbol(symbol)
            );
            println!("  ID: {}", goal.id);
        }
        GoalCommands::Contribute { id, amount } => {
            let id: GoalId = id
                .trim()
                .parse()
                .map_err(|_| SmartSaveError::Validation(format!("Invalid goal ID: {}", id)))?;
            let amount = parse_amount(&amount)?;

            match service.contribute(id, amount)? {
                Some(contribution) => {
                    let goal = &contribution.goal;
                    println!(
                        "Added {} to {} ({} / {})",
                        contribution.applied.format_with_symbol(symbol),
                        goal.name,
                        goal.current.format_with_symbol(symbol),
                        goal.target.format_with_symbol(symbol)
                    );
                    if contribution.completed {
                        println!("🎉 Congratulations! You've reached your savings goal: {}", goal.name);
                    }
                }
                None => println!("No savings goal with ID {}", id),
            }
        }
        GoalCommands::List => {
            let ledger = service.ledger()?;
            print!("{}", format_goal_list(ledger.savings_goals(), symbol));
        }
    }

    Ok(())
}
