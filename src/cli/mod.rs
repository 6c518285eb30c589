//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod ask;
pub mod budget;
pub mod expense;
pub mod export;
pub mod goal;

pub use ask::handle_ask_command;
pub use budget::{handle_budget_command, show_categories, show_summary, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command};
pub use goal::{handle_goal_command, GoalCommands};

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::{CategoryKind, Money};

/// Parse a user-entered amount that must be positive and at most [`Money::MAX`]
pub fn parse_amount(input: &str) -> SmartSaveResult<Money> {
    let input = input.trim();
    match Money::parse(input) {
        Ok(amount) if amount > Money::MAX => {
            Err(SmartSaveError::amount_over_limit(input, Money::MAX))
        }
        Ok(amount) if amount.is_positive() => Ok(amount),
        _ => Err(SmartSaveError::invalid_amount(input)),
    }
}

/// Parse a category id or display name
pub fn parse_category(input: &str) -> SmartSaveResult<CategoryKind> {
    input.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert_eq!(parse_amount(" $3 ").unwrap(), Money::from_units(3));

        for bad in ["0", "-5", "abc", "", "1.2.3"] {
            let err = parse_amount(bad).unwrap_err();
            assert!(matches!(err, SmartSaveError::InvalidAmount(_)), "{}", bad);
        }
    }

    #[test]
    fn test_parse_amount_enforces_limit() {
        assert_eq!(parse_amount("1000000000000").unwrap(), Money::MAX);

        let err = parse_amount("90000000000000000").unwrap_err();
        assert!(err.to_string().contains("larger than the limit"));
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("food").unwrap(), CategoryKind::Food);
        assert_eq!(parse_category("Personal Care").unwrap(), CategoryKind::PersonalCare);
        assert!(matches!(
            parse_category("groceries").unwrap_err(),
            SmartSaveError::UnknownCategory(_)
        ));
    }
}
